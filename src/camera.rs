//! Camera, per-pixel sampling loop, and the recursive color estimator.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::material::Color;
use crate::random;
use crate::ray::Ray;

/// Intersections closer than this are ignored on every traced ray, which
/// suppresses self-intersection with the surface a bounce started from.
const T_MIN: f32 = 0.001;

/// Pinhole/thin-lens camera and renderer.
///
/// Public fields configure the camera; the derived viewport geometry is
/// computed lazily on first render. Anti-aliasing comes from jittered
/// sub-pixel sampling, depth of field from sampling the defocus disk.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixels.
    pub image_width: u32,
    /// Rendered image height in pixels.
    pub image_height: u32,
    /// Number of jittered samples per pixel.
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces.
    pub max_depth: u32,
    /// Vertical field of view in degrees.
    pub vfov: f32,
    /// Camera position.
    pub lookfrom: Vec3A,
    /// Point the camera looks at.
    pub lookat: Vec3A,
    /// Camera-relative up direction.
    pub vup: Vec3A,
    /// Cone angle of rays through each pixel; 0 disables defocus blur.
    pub defocus_angle: f32,
    /// Distance from `lookfrom` to the plane of perfect focus.
    pub focus_dist: f32,

    // Derived state, filled in by initialize().
    center: Vec3A,
    pixel00_loc: Vec3A,
    pixel_delta_u: Vec3A,
    pixel_delta_v: Vec3A,
    pixel_samples_scale: f32,
    u: Vec3A,
    v: Vec3A,
    w: Vec3A,
    defocus_disk_u: Vec3A,
    defocus_disk_v: Vec3A,
    initialized: bool,
}

impl Camera {
    /// Create a camera with default settings: 100x100 image, 50 samples per
    /// pixel, 90 degree field of view, no defocus blur.
    pub fn new() -> Self {
        Self {
            image_width: 100,
            image_height: 100,
            samples_per_pixel: 50,
            max_depth: 50,
            vfov: 90.0,
            lookfrom: Vec3A::new(0.0, 0.0, 0.0),
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vup: Vec3A::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
            center: Vec3A::ZERO,
            pixel00_loc: Vec3A::ZERO,
            pixel_delta_u: Vec3A::ZERO,
            pixel_delta_v: Vec3A::ZERO,
            pixel_samples_scale: 0.0,
            u: Vec3A::ZERO,
            v: Vec3A::ZERO,
            w: Vec3A::ZERO,
            defocus_disk_u: Vec3A::ZERO,
            defocus_disk_v: Vec3A::ZERO,
            initialized: false,
        }
    }

    /// Render the scene.
    ///
    /// Averages `samples_per_pixel` estimates per pixel, in parallel across
    /// pixels. Returns the raw linear HDR image; gamma correction and
    /// clamping belong to the output stage.
    pub fn render(&mut self, world: &dyn Hittable) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        self.initialize();

        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering on {} CPU threads...",
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        // Each pixel is an independent, stateless unit of work; the scene is
        // read-only and the RNG is thread-local.
        image
            .enumerate_pixels_mut()
            .par_bridge()
            .for_each(|(i, j, pixel)| {
                let mut pixel_color = Color::ZERO;
                for _ in 0..self.samples_per_pixel {
                    let r = self.get_ray(i, j);
                    pixel_color += self.ray_color(&r, world, self.max_depth);
                }
                pixel_color *= self.pixel_samples_scale;
                *pixel = Rgb([pixel_color.x, pixel_color.y, pixel_color.z]);
                pb.inc(1);
            });

        pb.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());

        image
    }

    /// Compute the viewport geometry from the public settings.
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.image_height = self.image_height.max(1);
        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f32;
        self.center = self.lookfrom;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Orthonormal camera frame: w opposes the view direction.
        self.w = (self.lookfrom - self.lookat).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        let viewport_u = viewport_width * self.u;
        let viewport_v = viewport_height * -self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.center - (self.focus_dist * self.w) - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle.to_radians() / 2.0).tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        self.initialized = true;
    }

    /// Generate a jittered ray through pixel (i, j).
    fn get_ray(&self, i: u32, j: u32) -> Ray {
        let offset = self.sample_square();
        let pixel_sample = self.pixel00_loc
            + ((i as f32 + offset.x) * self.pixel_delta_u)
            + ((j as f32 + offset.y) * self.pixel_delta_v);

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample()
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Random offset in the [-0.5, 0.5] pixel square.
    fn sample_square(&self) -> Vec3A {
        Vec3A::new(
            random::random_f32() - 0.5,
            random::random_f32() - 0.5,
            0.0,
        )
    }

    /// Random ray origin on the defocus disk.
    fn defocus_disk_sample(&self) -> Vec3A {
        let p = random::random_in_unit_disk();
        self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
    }

    /// Recursive color estimator.
    ///
    /// Depth exhausted: black. Nearest hit scatters: attenuation times the
    /// estimate for the scattered ray. Hit but absorbed: black. No hit: the
    /// vertical white-to-sky-blue background gradient. The returned color is
    /// linear and unclamped.
    fn ray_color(&self, r: &Ray, world: &dyn Hittable, depth: u32) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }

        if let Some(rec) = world.hit(r, Interval::new(T_MIN, f32::INFINITY)) {
            return match rec.material.scatter(r, &rec) {
                Some(scatter) => {
                    scatter.attenuation * self.ray_color(&scatter.scattered, world, depth - 1)
                }
                None => Color::ZERO,
            };
        }

        // Sky: lerp on the y component of the unit direction, mapped from
        // [-1, 1] to [0, 1].
        let unit_direction = r.direction.normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
