//! Intervals of valid ray parameters.
//!
//! Intersection queries accept roots only strictly inside (min, max); the
//! strict bounds are what suppress self-intersection at t ~ 0 and keep the
//! closest-hit search in `HittableList` correct.

/// Interval [min, max] over f32.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Lower bound of the interval.
    pub min: f32,
    /// Upper bound of the interval.
    pub max: f32,
}

impl Interval {
    /// Empty interval (min > max); contains nothing.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Interval covering all of f32.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create an interval with the given bounds.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Inclusive containment: min <= x <= max.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Strict containment: min < x < max.
    ///
    /// This is the root-acceptance test for intersections; values exactly on
    /// either bound are rejected.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp x to the interval bounds.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_both_bounds() {
        let i = Interval::new(0.001, 2.0);
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(2.0));
        assert!(i.surrounds(0.0011));
        assert!(i.surrounds(1.9999));
    }

    #[test]
    fn contains_includes_bounds() {
        let i = Interval::new(-1.0, 1.0);
        assert!(i.contains(-1.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0001));
    }

    #[test]
    fn empty_and_universe() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.surrounds(f32::MAX));
        assert_eq!(Interval::new(1.0, 4.0).size(), 3.0);
    }

    #[test]
    fn clamp_to_bounds() {
        let i = Interval::new(0.0, 1.0);
        assert_eq!(i.clamp(-2.0), 0.0);
        assert_eq!(i.clamp(0.25), 0.25);
        assert_eq!(i.clamp(9.0), 1.0);
    }
}
