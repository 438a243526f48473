//! The iterative path tracer: carries throughput across bounces until the
//! path escapes to the background, is absorbed, hits an emitter, or
//! exhausts its depth budget.

use crate::bsdf;
use crate::material::MaterialKind;
use crate::rng::Pcg32;
use crate::scene::Scene;
use crate::vec3::{Color, Ray};

/// Minimum `t` accepted for a scene intersection, large enough to skip the
/// surface a ray was just emitted from without clipping legitimate nearby
/// geometry.
const SHADOW_EPS: f32 = 1e-2;

fn background(direction: crate::vec3::Vec3) -> Color {
    let unit = direction.normalized();
    let t = 0.5 * (unit.y + 1.0);
    Color::ones().lerp(Color::new(0.5, 0.7, 1.0), t)
}

/// Traces `ray` through `scene`, bouncing up to `max_depth` times.
pub fn trace_ray(ray: Ray, scene: &Scene, rng: &mut Pcg32, max_depth: u32) -> Color {
    let mut throughput = Color::ones();
    let mut current = ray;

    for _ in 0..max_depth {
        let hit = match scene.intersect(&current, SHADOW_EPS, f32::INFINITY) {
            Some(hit) => hit,
            None => return throughput.hadamard(background(current.direction)),
        };

        let material = scene.material(hit.material_index);
        if material.kind == MaterialKind::Emissive {
            return throughput.hadamard(material.emission);
        }

        let wo = -current.direction.normalized();
        let sample = bsdf::sample(material, &hit, wo, rng);
        if sample.pdf <= 0.0 {
            return Color::zero();
        }

        if material.kind == MaterialKind::Dielectric {
            throughput = throughput.hadamard(sample.f);
        } else {
            let cos_theta = hit.normal.dot(sample.wi).abs();
            if cos_theta <= 0.0 {
                return Color::zero();
            }
            throughput = throughput.hadamard(sample.f) * (cos_theta / sample.pdf);
        }

        current = Ray::new(hit.position, sample.wi);
    }

    Color::zero()
}
