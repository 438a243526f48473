//! The material table backing the BSDF subsystem, plus the hit/sample
//! records that flow between intersection, shading, and the path tracer.

use crate::vec3::{Color, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Diffuse,
    Metal,
    Physical,
    Dielectric,
    Emissive,
}

/// A tagged material record. Unused fields for a given `kind` are left at
/// zero; the record is immutable once pushed into [`crate::scene::Scene`].
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub kind: MaterialKind,
    pub base_color: Color,
    pub roughness: f32,
    pub metallic: f32,
    pub ior: f32,
    pub emission: Color,
}

impl Material {
    pub fn diffuse(base_color: Color) -> Self {
        Self {
            kind: MaterialKind::Diffuse,
            base_color,
            roughness: 0.0,
            metallic: 0.0,
            ior: 1.0,
            emission: Color::zero(),
        }
    }

    /// Metal is a `Physical` material pinned to `metallic = 1.0` — the two
    /// kinds share one BSDF evaluation path (see DESIGN.md).
    pub fn metal(base_color: Color, roughness: f32) -> Self {
        Self {
            kind: MaterialKind::Metal,
            base_color,
            roughness: roughness.clamp(0.0, 1.0),
            metallic: 1.0,
            ior: 1.0,
            emission: Color::zero(),
        }
    }

    pub fn physical(base_color: Color, metallic: f32, roughness: f32) -> Self {
        Self {
            kind: MaterialKind::Physical,
            base_color,
            roughness: roughness.clamp(0.0, 1.0),
            metallic: metallic.clamp(0.0, 1.0),
            ior: 1.0,
            emission: Color::zero(),
        }
    }

    pub fn dielectric(ior: f32) -> Self {
        Self {
            kind: MaterialKind::Dielectric,
            base_color: Color::ones(),
            roughness: 0.0,
            metallic: 0.0,
            ior,
            emission: Color::zero(),
        }
    }

    pub fn emissive(emission: Color) -> Self {
        Self {
            kind: MaterialKind::Emissive,
            base_color: Color::zero(),
            roughness: 0.0,
            metallic: 0.0,
            ior: 1.0,
            emission,
        }
    }
}

/// A ray/scene intersection. Invariant: `normal` is unit length and oriented
/// against the incoming ray (`dot(normal, incoming.direction) <= 0`).
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub position: Vec3,
    pub normal: Vec3,
    pub t: f32,
    pub front_face: bool,
    pub material_index: usize,
}

impl HitRecord {
    /// Orients `outward_normal` against `ray_direction` and records whether
    /// the hit was on the front face, per the spec's HitRecord invariant.
    pub fn oriented(
        position: Vec3,
        ray_direction: Vec3,
        outward_normal: Vec3,
        t: f32,
        material_index: usize,
    ) -> Self {
        let front_face = ray_direction.dot(outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { position, normal, t, front_face, material_index }
    }
}

/// The result of sampling a BSDF: a candidate next direction, the
/// scattering value at that direction, and its sampling pdf. `pdf <= 0`
/// signals an invalid sample — the path tracer must reject it.
#[derive(Debug, Clone, Copy)]
pub struct BsdfSample {
    pub wi: Vec3,
    pub f: Color,
    pub pdf: f32,
}

impl BsdfSample {
    pub const fn invalid() -> Self {
        Self { wi: Vec3::zero(), f: Color::zero(), pdf: 0.0 }
    }
}
