//! Orthonormal basis local to a surface normal, used to transform sampled
//! BSDF directions (cosine hemisphere, GGX half-vector) from local shading
//! space into world space.

use crate::vec3::Vec3;

pub struct Onb {
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Onb {
    pub fn from_normal(n: Vec3) -> Self {
        let w = n;
        let a = if w.x.abs() > 0.9 { Vec3::unit_y() } else { Vec3::unit_x() };
        let v = w.cross(a).normalized();
        let u = w.cross(v);
        Self { u, v, w }
    }

    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.x * self.u + local.y * self.v + local.z * self.w
    }
}
