//! Material scattering models.
//!
//! Three variants: Lambertian (diffuse), Metal (specular with fuzz), and
//! Dielectric (refractive). A material either scatters the incoming ray,
//! producing an attenuation color and a new ray, or absorbs it.

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// RGB color in linear space.
pub type Color = Vec3A;

/// Result of a successful scatter: the per-bounce color multiplier and the
/// ray to continue tracing.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Component-wise color multiplier for this bounce.
    pub attenuation: Color,
    /// The scattered ray, originating at the hit point.
    pub scattered: Ray,
}

/// Surface material variants.
///
/// A closed tagged union rather than a trait object; instances are shared
/// across primitives through `Arc<MaterialType>` and never mutated after
/// construction.
#[derive(Debug, Clone, Copy)]
pub enum MaterialType {
    /// Diffuse matte surface.
    Lambertian {
        /// Base reflected color.
        albedo: Color,
    },

    /// Specular reflector.
    Metal {
        /// Base reflected color.
        albedo: Color,
        /// Roughness: 0.0 is a perfect mirror, 1.0 maximally perturbed.
        fuzz: f32,
    },

    /// Transparent refractive surface such as glass or water.
    Dielectric {
        /// Index of refraction (1.0 = vacuum/air, ~1.5 = glass).
        refraction_index: f32,
    },
}

impl MaterialType {
    /// Scatter the incoming ray at the given hit.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
        match *self {
            MaterialType::Lambertian { albedo } => scatter_lambertian(albedo, rec),
            MaterialType::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec),
            MaterialType::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec)
            }
        }
    }
}

/// Diffuse scattering: normal plus a random unit vector.
fn scatter_lambertian(albedo: Color, rec: &HitRecord) -> Option<Scatter> {
    let mut direction = rec.normal + random::random_unit_vector();

    // The random vector can nearly cancel the normal; fall back to the
    // normal itself rather than scattering a degenerate ray.
    if direction.length_squared() < 1e-8 {
        direction = rec.normal;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

/// Specular reflection with fuzz perturbation.
fn scatter_metal(albedo: Color, fuzz: f32, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let direction = reflected + fuzz.min(1.0) * random::random_in_unit_sphere();

    // A fuzzed reflection that ends up below the surface is absorbed.
    if direction.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

/// Refraction with total internal reflection and Schlick-weighted
/// stochastic reflect/refract choice. Glass does not tint: attenuation is
/// always white.
fn scatter_dielectric(refraction_index: f32, r_in: &Ray, rec: &HitRecord) -> Option<Scatter> {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32() {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some(Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    })
}

/// Mirror reflection of v about the unit normal n.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of the unit vector uv through a surface with unit
/// normal n and index ratio etai_over_etat.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of angle-dependent reflectance.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
