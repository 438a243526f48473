//! In-process demo scenes selectable from the CLI. No scene-file format is
//! parsed; these are the only way to populate a `Scene` short of calling
//! the `Scene` API directly.

use crate::camera::{Camera, CameraConfig};
use crate::rng::Pcg32;
use crate::scene::Scene;
use crate::vec3::{Color, Point3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPreset {
    /// A single diffuse sphere resting on a large diffuse "ground" sphere.
    HeroSphere,
    /// Three spheres side by side: diffuse, metal, dielectric.
    MaterialShowcase,
    /// A field of small spheres with randomized materials around three
    /// feature spheres, in the spirit of the classic "next week" scene.
    RandomField,
}

impl DemoPreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(Self::HeroSphere),
            "showcase" => Some(Self::MaterialShowcase),
            "field" => Some(Self::RandomField),
            _ => None,
        }
    }
}

pub fn build_scene(preset: DemoPreset) -> Scene {
    match preset {
        DemoPreset::HeroSphere => hero_sphere(),
        DemoPreset::MaterialShowcase => material_showcase(),
        DemoPreset::RandomField => random_field(),
    }
}

pub fn build_camera(preset: DemoPreset, width: u32, height: u32) -> Camera {
    match preset {
        DemoPreset::HeroSphere => Camera::new(CameraConfig {
            look_from: Point3::new(0.0, 1.0, 4.0),
            look_at: Point3::new(0.0, 0.3, 0.0),
            v_up: Vec3::unit_y(),
            image_width: width,
            image_height: height,
            v_fov_degrees: 40.0,
            aperture: 0.0,
            focus_distance: 4.5,
        }),
        DemoPreset::MaterialShowcase => Camera::new(CameraConfig {
            look_from: Point3::new(0.0, 1.2, 5.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            v_up: Vec3::unit_y(),
            image_width: width,
            image_height: height,
            v_fov_degrees: 35.0,
            aperture: 0.05,
            focus_distance: 5.0,
        }),
        DemoPreset::RandomField => Camera::new(CameraConfig {
            look_from: Point3::new(13.0, 2.0, 3.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            v_up: Vec3::unit_y(),
            image_width: width,
            image_height: height,
            v_fov_degrees: 20.0,
            aperture: 0.1,
            focus_distance: 10.0,
        }),
    }
}

fn hero_sphere() -> Scene {
    let mut scene = Scene::new();
    let ground = scene.add_diffuse(Color::new(0.5, 0.5, 0.5));
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    let hero = scene.add_physical(Color::new(0.8, 0.3, 0.2), 0.2, 0.3);
    scene.add_sphere(Point3::new(0.0, 1.0, 0.0), 1.0, hero);

    let light = scene.add_emissive(Color::new(6.0, 6.0, 6.0));
    scene.add_sphere(Point3::new(-2.5, 3.0, -1.0), 0.6, light);

    scene.build();
    scene
}

fn material_showcase() -> Scene {
    let mut scene = Scene::new();
    let ground = scene.add_diffuse(Color::new(0.45, 0.45, 0.45));
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    let diffuse = scene.add_diffuse(Color::new(0.7, 0.2, 0.2));
    scene.add_sphere(Point3::new(-2.2, 1.0, 0.0), 1.0, diffuse);

    let metal = scene.add_metal(Color::new(0.8, 0.8, 0.9), 0.1);
    scene.add_sphere(Point3::new(0.0, 1.0, 0.0), 1.0, metal);

    let glass = scene.add_dielectric(1.5);
    scene.add_sphere(Point3::new(2.2, 1.0, 0.0), 1.0, glass);

    let light = scene.add_emissive(Color::new(8.0, 8.0, 8.0));
    scene.add_sphere(Point3::new(0.0, 4.0, 3.0), 0.8, light);

    scene.build();
    scene
}

fn random_field() -> Scene {
    let mut scene = Scene::new();
    let ground = scene.add_diffuse(Color::new(0.5, 0.5, 0.5));
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    let mut rng = Pcg32::new(0xC0FFEE, 0);
    for a in -6..6 {
        for b in -6..6 {
            let center = Point3::new(
                a as f32 + 0.9 * rng.uniform01(),
                0.2,
                b as f32 + 0.9 * rng.uniform01(),
            );
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choice = rng.uniform01();
            let material = if choice < 0.7 {
                let albedo = Color::new(rng.uniform01(), rng.uniform01(), rng.uniform01()).hadamard(Color::new(
                    rng.uniform01(),
                    rng.uniform01(),
                    rng.uniform01(),
                ));
                scene.add_diffuse(albedo)
            } else if choice < 0.9 {
                let albedo = Color::new(rng.uniform(0.5, 1.0), rng.uniform(0.5, 1.0), rng.uniform(0.5, 1.0));
                scene.add_metal(albedo, rng.uniform(0.0, 0.4))
            } else {
                scene.add_dielectric(1.5)
            };
            scene.add_sphere(center, 0.2, material);
        }
    }

    let glass = scene.add_dielectric(1.5);
    scene.add_sphere(Point3::new(0.0, 1.0, 0.0), 1.0, glass);

    let diffuse = scene.add_diffuse(Color::new(0.4, 0.2, 0.1));
    scene.add_sphere(Point3::new(-4.0, 1.0, 0.0), 1.0, diffuse);

    let metal = scene.add_metal(Color::new(0.7, 0.6, 0.5), 0.0);
    scene.add_sphere(Point3::new(4.0, 1.0, 0.0), 1.0, metal);

    scene.build();
    scene
}
