//! Analytic sphere intersection, the only primitive kind this tracer supports.

use crate::aabb::Aabb;
use crate::material::HitRecord;
use crate::vec3::{Point3, Ray};

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub material_index: usize,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, material_index: usize) -> Self {
        Self { center, radius, material_index }
    }

    /// Solves `|origin + t*dir - center|^2 = radius^2` for the nearest root
    /// in `(t_min, t_max)`, returning `None` on a miss or a root outside
    /// that interval.
    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        let mut root = (-half_b - sqrt_d) / a;
        if root <= t_min || root >= t_max {
            root = (-half_b + sqrt_d) / a;
            if root <= t_min || root >= t_max {
                return None;
            }
        }

        let position = ray.at(root);
        let outward_normal = (position - self.center) / self.radius;
        Some(HitRecord::oriented(position, ray.direction, outward_normal, root, self.material_index))
    }

    pub fn bounds(&self) -> Aabb {
        let r = Point3::splat(self.radius);
        Aabb::new(self.center - r, self.center + r)
    }
}
