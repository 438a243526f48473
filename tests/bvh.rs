//! BVH traversal cross-checked against brute-force sphere intersection over
//! the same primitive set.

use photontrace::scene::Scene;
use photontrace::sphere::Sphere;
use photontrace::vec3::{Color, Point3, Ray, Vec3};

fn brute_force_closest(spheres: &[Sphere], ray: &Ray, t_min: f32, t_max: f32) -> Option<usize> {
    let mut closest = t_max;
    let mut winner = None;
    for sphere in spheres {
        if let Some(hit) = sphere.intersect(ray, t_min, closest) {
            closest = hit.t;
            winner = Some(hit.material_index);
        }
    }
    winner
}

#[test]
fn bvh_agrees_with_brute_force_over_a_scattered_field_of_spheres() {
    let mut scene = Scene::new();
    let mut spheres = Vec::new();
    let mut rng_state = 0xDEADBEEFu64;
    let mut next = || {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
    };

    for i in 0..40 {
        let center = Point3::new(next() * 20.0, next() * 20.0, next() * 20.0);
        let radius = 0.5 + (i % 5) as f32 * 0.3;
        let mat = scene.add_diffuse(Color::splat(0.5));
        scene.add_sphere(center, radius, mat);
        spheres.push(Sphere::new(center, radius, mat));
    }
    scene.build();

    for origin_seed in 0..20 {
        let origin = Point3::new(
            (origin_seed as f32 - 10.0) * 3.0,
            (origin_seed as f32 % 4.0 - 2.0) * 5.0,
            -50.0,
        );
        let direction = (Point3::zero() - origin).normalized();
        let ray = Ray::new(origin, direction);

        let via_bvh = scene.intersect(&ray, 1e-3, f32::INFINITY).map(|h| h.material_index);
        let via_brute_force = brute_force_closest(&spheres, &ray, 1e-3, f32::INFINITY);
        assert_eq!(via_bvh, via_brute_force, "mismatch for ray from {origin:?} dir {direction:?}");
    }
}

#[test]
fn ray_parallel_to_every_axis_does_not_panic_the_bvh() {
    let mut scene = Scene::new();
    let mat = scene.add_diffuse(Color::splat(0.5));
    scene.add_sphere(Point3::zero(), 1.0, mat);
    scene.build();

    for direction in [Vec3::unit_x(), Vec3::unit_y(), Vec3::new(0.0, 0.0, 1.0)] {
        let ray = Ray::new(Point3::new(-10.0, -10.0, -10.0), direction);
        let _ = scene.intersect(&ray, 1e-3, f32::INFINITY);
    }
}
