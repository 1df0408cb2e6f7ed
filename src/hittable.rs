//! Ray-object intersection.
//!
//! `Hittable` is the capability every piece of geometry exposes; a
//! `HitRecord` carries the intersection data a material needs to scatter.
//! `HittableList` composes hittables and reports the nearest hit among them.

use std::sync::Arc;

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;

/// Intersection data produced by a successful hit test.
///
/// Constructed fresh per intersection and consumed immediately by the
/// caller; never stored across bounces.
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Point where the ray meets the surface.
    pub p: Vec3A,
    /// Unit surface normal at `p`, oriented against the incoming ray.
    pub normal: Vec3A,
    /// Ray parameter of the intersection.
    pub t: f32,
    /// True when the ray struck the outward-facing side of the surface.
    pub front_face: bool,
    /// Material governing scattering at this surface point.
    pub material: Arc<MaterialType>,
}

impl HitRecord {
    /// Build a record from the geometric outward normal.
    ///
    /// The stored normal always points against the incident ray; whether it
    /// had to be flipped is recorded in `front_face`, which the dielectric
    /// material uses to tell entering from exiting.
    pub fn new(
        r: &Ray,
        t: f32,
        p: Vec3A,
        outward_normal: Vec3A,
        material: Arc<MaterialType>,
    ) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Anything a ray can be tested against.
///
/// Implementations must be thread-safe: the scene is built once, then read
/// concurrently by every render worker.
pub trait Hittable: Sync + Send {
    /// Return the nearest intersection with parameter strictly inside
    /// `ray_t`, or `None` when the ray misses.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Ordered collection of hittables forming a scene.
#[derive(Default)]
pub struct HittableList {
    /// The scene contents, tested linearly.
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        // Each accepted hit tightens the search interval, so later objects
        // can only win by being strictly nearer.
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialType;
    use crate::sphere::Sphere;

    fn diffuse(albedo: Vec3A) -> Arc<MaterialType> {
        Arc::new(MaterialType::Lambertian { albedo })
    }

    #[test]
    fn empty_list_never_hits() {
        let world = HittableList::new();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(world.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn returns_globally_nearest_hit_not_first_listed() {
        // The farther sphere is listed first; the list must still report the
        // nearer one's intersection and material.
        let far_albedo = Vec3A::new(0.9, 0.0, 0.0);
        let near_albedo = Vec3A::new(0.0, 0.9, 0.0);

        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -4.0),
            1.0,
            diffuse(far_albedo),
        )));
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -2.0),
            1.0,
            diffuse(near_albedo),
        )));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = world
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("head-on ray must hit");

        assert!((rec.t - 1.0).abs() < 1e-5);
        match *rec.material {
            MaterialType::Lambertian { albedo } => assert_eq!(albedo, near_albedo),
            _ => panic!("wrong material variant"),
        }
    }

    #[test]
    fn narrowed_interval_excludes_all_hits() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -2.0),
            0.5,
            diffuse(Vec3A::ONE),
        )));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        // Both roots (1.5 and 2.5) lie outside (0.001, 1.0).
        assert!(world.hit(&r, Interval::new(0.001, 1.0)).is_none());
    }

    #[test]
    fn record_orients_normal_against_ray() {
        let mat = diffuse(Vec3A::ONE);
        let r = Ray::new(Vec3A::new(0.0, 2.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));

        let front = HitRecord::new(&r, 1.0, Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0), mat.clone());
        assert!(front.front_face);
        assert_eq!(front.normal, Vec3A::new(0.0, 1.0, 0.0));

        let back = HitRecord::new(&r, 1.0, Vec3A::ZERO, Vec3A::new(0.0, -1.0, 0.0), mat);
        assert!(!back.front_face);
        assert_eq!(back.normal, Vec3A::new(0.0, 1.0, 0.0));
    }
}
