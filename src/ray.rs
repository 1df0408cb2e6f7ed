//! Ray representation.
//!
//! A ray is the half-line r(t) = origin + t * direction; every intersection
//! query and every bounce in the tracer is phrased in terms of it.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates: the camera position
    /// for primary rays, a surface point for scattered rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be unit length; callers that need a unit direction
    /// (sky gradient, dielectric refraction) normalize on use. Assumed
    /// non-zero by construction.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray: origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(2.5), Vec3A::new(1.0, 2.0, 0.5));
        assert_eq!(r.at(-1.0), Vec3A::new(1.0, 2.0, 4.0));
    }
}
