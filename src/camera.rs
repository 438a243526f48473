//! Pinhole/thin-lens camera: derives a view basis and viewport once at
//! construction, then generates jittered primary rays per pixel sample.

use crate::rng::Pcg32;
use crate::vec3::{Point3, Ray, Vec3};

pub struct CameraConfig {
    pub look_from: Point3,
    pub look_at: Point3,
    pub v_up: Vec3,
    pub image_width: u32,
    pub image_height: u32,
    pub v_fov_degrees: f32,
    /// Lens diameter; 0 selects a pinhole camera with infinite depth of field.
    pub aperture: f32,
    pub focus_distance: f32,
}

pub struct Camera {
    look_from: Point3,
    u: Vec3,
    v: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left: Point3,
    lens_radius: f32,
    focus_distance: f32,
    image_width: u32,
    image_height: u32,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let w = (config.look_from - config.look_at).normalized();
        let u = config.v_up.cross(w).normalized();
        let v = w.cross(u);

        let aspect = config.image_width as f32 / config.image_height as f32;
        let theta = config.v_fov_degrees.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = aspect * viewport_height;

        let horizontal = u * viewport_width;
        let vertical = v * viewport_height;
        let viewport_center = config.look_from - w;
        let lower_left = viewport_center - horizontal / 2.0 - vertical / 2.0;

        Self {
            look_from: config.look_from,
            u,
            v,
            horizontal,
            vertical,
            lower_left,
            lens_radius: config.aperture / 2.0,
            focus_distance: config.focus_distance,
            image_width: config.image_width,
            image_height: config.image_height,
        }
    }

    /// Generates a primary ray through pixel `(x, y)` (row 0 at the image
    /// top) with subpixel jitter and, for a non-pinhole camera, a sampled
    /// lens offset.
    pub fn shoot_ray(&self, x: u32, y: u32, rng: &mut Pcg32) -> Ray {
        let sx = (x as f32 + rng.uniform01()) / (self.image_width - 1) as f32;
        let sy = ((self.image_height - 1 - y) as f32 + rng.uniform01()) / (self.image_height - 1) as f32;

        let target = self.lower_left + self.horizontal * sx + self.vertical * sy;
        let direction = target - self.look_from;

        if self.lens_radius <= 0.0 {
            return Ray::new(self.look_from, direction);
        }

        let (dx, dy) = sample_unit_disk(rng);
        let offset = self.u * (dx * self.lens_radius) + self.v * (dy * self.lens_radius);
        let origin = self.look_from + offset;
        let focus_point = self.look_from + direction.normalized() * self.focus_distance;
        Ray::new(origin, focus_point - origin)
    }
}

/// Rejection-samples a point in the unit disk.
fn sample_unit_disk(rng: &mut Pcg32) -> (f32, f32) {
    loop {
        let x = rng.uniform(-1.0, 1.0);
        let y = rng.uniform(-1.0, 1.0);
        if x * x + y * y < 1.0 {
            return (x, y);
        }
    }
}
