use std::sync::Arc;

use clap::Parser;
use glam::Vec3A;
use log::info;

mod cli;
mod logger;
mod output;

use cli::{Args, ScenePreset};
use logger::init_logger;
use lumapath::camera::Camera;
use lumapath::hittable::HittableList;
use lumapath::material::MaterialType;
use lumapath::random;
use lumapath::sphere::Sphere;
use output::{save_image_as_exr, save_image_as_png};

/// Book-cover style scene: a ground sphere, a 22x22 field of randomized
/// small spheres, and three large feature spheres.
fn create_cover_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground_material = Arc::new(MaterialType::Lambertian {
        albedo: Vec3A::new(0.5, 0.5, 0.5),
    });
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f32();
            let center = Vec3A::new(
                a as f32 + 0.9 * random::random_f32(),
                0.2,
                b as f32 + 0.9 * random::random_f32(),
            );

            // Keep the small spheres clear of the large metal sphere.
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() > 0.9 {
                let sphere_material = if choose_mat < 0.8 {
                    let albedo = random::random_color() * random::random_color();
                    Arc::new(MaterialType::Lambertian { albedo })
                } else if choose_mat < 0.95 {
                    let albedo = random::random_color_range(0.5, 1.0);
                    let fuzz = random::random_f32_range(0.0, 0.5);
                    Arc::new(MaterialType::Metal { albedo, fuzz })
                } else {
                    Arc::new(MaterialType::Dielectric {
                        refraction_index: 1.5,
                    })
                };

                world.add(Box::new(Sphere::new(center, 0.2, sphere_material)));
            }
        }
    }

    let glass = Arc::new(MaterialType::Dielectric {
        refraction_index: 1.5,
    });
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 1.0, glass)));

    let brown = Arc::new(MaterialType::Lambertian {
        albedo: Vec3A::new(0.4, 0.2, 0.1),
    });
    world.add(Box::new(Sphere::new(Vec3A::new(-4.0, 1.0, 0.0), 1.0, brown)));

    let steel = Arc::new(MaterialType::Metal {
        albedo: Vec3A::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    });
    world.add(Box::new(Sphere::new(Vec3A::new(4.0, 1.0, 0.0), 1.0, steel)));

    world
}

/// Three-sphere scene demonstrating the hollow glass bubble: the left glass
/// sphere contains a negative-radius inner sphere sharing the same material,
/// which inverts the surface orientation and renders as a thin shell.
fn create_hollow_glass_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground = Arc::new(MaterialType::Lambertian {
        albedo: Vec3A::new(0.8, 0.8, 0.0),
    });
    let matte_blue = Arc::new(MaterialType::Lambertian {
        albedo: Vec3A::new(0.1, 0.2, 0.5),
    });
    let glass = Arc::new(MaterialType::Dielectric {
        refraction_index: 1.5,
    });
    let gold = Arc::new(MaterialType::Metal {
        albedo: Vec3A::new(0.8, 0.6, 0.2),
        fuzz: 0.0,
    });

    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.2),
        0.5,
        matte_blue,
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::clone(&glass),
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        -0.45,
        glass,
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(1.0, 0.0, -1.0),
        0.5,
        gold,
    )));

    world
}

/// Configure the camera for the selected scene.
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;
    camera.vfov = 20.0;
    camera.vup = Vec3A::new(0.0, 1.0, 0.0);

    match args.scene {
        ScenePreset::Cover => {
            camera.lookfrom = Vec3A::new(13.0, 2.0, 3.0);
            camera.lookat = Vec3A::new(0.0, 0.0, 0.0);
            camera.defocus_angle = 0.6;
            camera.focus_dist = 10.0;
        }
        ScenePreset::Hollow => {
            camera.lookfrom = Vec3A::new(-2.0, 2.0, 1.0);
            camera.lookat = Vec3A::new(0.0, 0.0, -1.0);
            camera.defocus_angle = 0.0;
            camera.focus_dist = 3.4;
        }
    }

    camera
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!(
        "Lumapath - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, args.height, args.samples_per_pixel, args.max_depth
    );

    if let Some(seed) = args.seed {
        info!("Seeding random generator with {}", seed);
        random::set_seed(seed);
    }

    let world = match args.scene {
        ScenePreset::Cover => create_cover_scene(),
        ScenePreset::Hollow => create_hollow_glass_scene(),
    };

    let mut camera = create_camera(&args);
    let image = camera.render(&world);

    if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output, args.width, args.height);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output, args.width, args.height);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
