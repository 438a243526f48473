//! Scene-level material bookkeeping: indices returned by the `add_*`
//! constructors stay stable and correctly attached to the right sphere.

use photontrace::material::MaterialKind;
use photontrace::scene::Scene;
use photontrace::vec3::{Color, Point3, Ray, Vec3};

#[test]
fn material_indices_returned_by_add_calls_match_what_intersect_reports() {
    let mut scene = Scene::new();
    let diffuse = scene.add_diffuse(Color::new(1.0, 0.0, 0.0));
    let metal = scene.add_metal(Color::new(0.0, 1.0, 0.0), 0.1);
    let glass = scene.add_dielectric(1.5);
    let light = scene.add_emissive(Color::new(2.0, 2.0, 2.0));

    scene.add_sphere(Point3::new(-3.0, 0.0, 0.0), 1.0, diffuse);
    scene.add_sphere(Point3::new(-1.0, 0.0, 0.0), 1.0, metal);
    scene.add_sphere(Point3::new(1.0, 0.0, 0.0), 1.0, glass);
    scene.add_sphere(Point3::new(3.0, 0.0, 0.0), 1.0, light);
    scene.build();

    let cases = [
        (-3.0, MaterialKind::Diffuse),
        (-1.0, MaterialKind::Metal),
        (1.0, MaterialKind::Dielectric),
        (3.0, MaterialKind::Emissive),
    ];

    for (x, expected_kind) in cases {
        let ray = Ray::new(Point3::new(x, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.intersect(&ray, 1e-3, f32::INFINITY).unwrap();
        assert_eq!(scene.material_kind(hit.material_index), expected_kind);
    }
}

#[test]
fn metal_is_pinned_to_fully_metallic() {
    let mut scene = Scene::new();
    let metal = scene.add_metal(Color::new(0.8, 0.8, 0.8), 0.3);
    assert_eq!(scene.material(metal).metallic, 1.0);
    assert_eq!(scene.material(metal).kind, MaterialKind::Metal);
}
