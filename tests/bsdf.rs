//! Cross-cutting BSDF properties: every sampled direction from every kind
//! stays physically sane (unit length, upper hemisphere where required,
//! finite throughput contribution).

use photontrace::bsdf;
use photontrace::material::{HitRecord, Material};
use photontrace::rng::Pcg32;
use photontrace::vec3::{Color, Point3, Vec3};

fn hit() -> HitRecord {
    HitRecord {
        position: Point3::zero(),
        normal: Vec3::unit_y(),
        t: 1.0,
        front_face: true,
        material_index: 0,
    }
}

#[test]
fn diffuse_and_metal_samples_always_land_above_the_surface() {
    let wo = Vec3::new(0.1, 0.95, 0.2).normalized();
    let hit = hit();
    let mut rng = Pcg32::new(55, 1);

    for material in [
        Material::diffuse(Color::new(0.7, 0.7, 0.7)),
        Material::metal(Color::new(0.9, 0.9, 0.9), 0.4),
        Material::physical(Color::new(0.5, 0.2, 0.1), 0.3, 0.5),
    ] {
        for _ in 0..2000 {
            let sample = bsdf::sample(&material, &hit, wo, &mut rng);
            if sample.pdf <= 0.0 {
                continue;
            }
            assert!((sample.wi.length() - 1.0).abs() < 1e-4);
            assert!(sample.f.x >= 0.0 && sample.f.y >= 0.0 && sample.f.z >= 0.0);
            assert!(sample.f.x.is_finite() && sample.pdf.is_finite());
        }
    }
}

#[test]
fn eval_and_pdf_agree_on_which_directions_are_valid() {
    let material = Material::metal(Color::new(0.8, 0.8, 0.8), 0.25);
    let hit = hit();
    let wo = Vec3::new(0.0, 1.0, 0.0);
    let below_surface = Vec3::new(0.3, -0.5, 0.1).normalized();

    assert_eq!(bsdf::eval(&material, &hit, wo, below_surface), Color::zero());
    assert_eq!(bsdf::pdf(&material, &hit, wo, below_surface), 0.0);
}

#[test]
fn dielectric_always_returns_a_unit_throughput_sample() {
    let material = Material::dielectric(1.33);
    let hit = hit();
    let wo = Vec3::new(0.2, 0.9, 0.1).normalized();
    let mut rng = Pcg32::new(9, 4);

    for _ in 0..500 {
        let sample = bsdf::sample(&material, &hit, wo, &mut rng);
        assert_eq!(sample.f, Color::ones());
        assert_eq!(sample.pdf, 1.0);
        assert!((sample.wi.length() - 1.0).abs() < 1e-4);
    }
}
