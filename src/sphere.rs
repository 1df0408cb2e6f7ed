//! Sphere primitive.
//!
//! Ray-sphere intersection via the half-b form of the quadratic. A tangent
//! ray (discriminant exactly zero) is treated as a miss; changing that
//! boundary would turn grazing rays into single-point hits.

use std::sync::Arc;

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;

/// Sphere defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere. May be negative: the surface geometry is
    /// identical but the outward normal flips inward, which makes a
    /// negative-radius sphere nested inside a glass sphere render as a
    /// hollow bubble.
    pub radius: f32,

    /// Material shared with however many spheres reference it.
    pub material: Arc<MaterialType>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are accepted, see [`Sphere::radius`].
    pub fn new(center: Vec3A, radius: f32, material: Arc<MaterialType>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;

        // |origin + t*dir - center|^2 = r^2 as a quadratic in t, with the
        // factor of two folded out of the linear coefficient.
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            // No intersection; tangent rays fall in here deliberately.
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first, far root only if the near one is out of range.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        // Dividing by the signed radius flips the normal for hollow spheres.
        let outward_normal = (p - self.center) / self.radius;

        Some(HitRecord::new(
            r,
            root,
            p,
            outward_normal,
            Arc::clone(&self.material),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sphere(center: Vec3A, radius: f32) -> Sphere {
        Sphere::new(
            center,
            radius,
            Arc::new(MaterialType::Lambertian {
                albedo: Vec3A::splat(0.5),
            }),
        )
    }

    #[test]
    fn head_on_ray_hits_near_side_at_d_minus_r() {
        // Origin at distance 2 from the center, aimed straight at it.
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -2.0), 0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("head-on ray must hit");

        assert!((rec.t - 1.5).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!(rec.normal.abs_diff_eq(Vec3A::new(0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn far_side_hit_at_d_plus_r_when_near_root_excluded() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -2.0), 0.5);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        // Interval excludes the near root at 1.5, so the far root must win.
        let rec = sphere
            .hit(&r, Interval::new(1.6, f32::INFINITY))
            .expect("far root should be accepted");

        assert!((rec.t - 2.5).abs() < 1e-5);
        // Exiting hit: geometric normal points back along the ray, so the
        // record reports a back face with the normal flipped toward us.
        assert!(!rec.front_face);
        assert!(rec.normal.abs_diff_eq(Vec3A::new(0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn miss_when_closest_approach_exceeds_radius() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -2.0), 0.5);
        // Closest approach is 1.0 > 0.5.
        let r = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn exact_tangent_ray_is_a_miss() {
        // Grazing ray at exactly the radius: discriminant is exactly zero
        // (all quantities representable), which must report no hit.
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -2.0), 0.5);
        let r = Ray::new(Vec3A::new(0.0, 0.5, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn front_face_tracks_sign_of_incoming_dot_outward() {
        let sphere = test_sphere(Vec3A::ZERO, 1.0);

        // From outside: entering hit is a front face.
        let outside = Ray::new(Vec3A::new(0.0, 0.0, 3.0), Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere
            .hit(&outside, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!(rec.front_face);

        // From the center: the first surface crossing is seen from inside.
        let inside = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere
            .hit(&inside, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!(!rec.front_face);
        // Stored normal still opposes the ray.
        assert!(rec.normal.dot(inside.direction) < 0.0);
    }

    #[test]
    fn negative_radius_flips_surface_orientation() {
        // The hollow-bubble trick: same geometry, inverted normals. A ray
        // entering from outside sees a back face because the outward normal
        // points toward the center.
        let bubble = test_sphere(Vec3A::ZERO, -0.5);
        let r = Ray::new(Vec3A::new(0.0, 0.0, 2.0), Vec3A::new(0.0, 0.0, -1.0));

        let rec = bubble
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("geometry is unchanged by the sign of the radius");

        assert!((rec.t - 1.5).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!(rec.normal.abs_diff_eq(Vec3A::new(0.0, 0.0, 1.0), 1e-5));
    }
}
