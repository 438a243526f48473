//! The object store: materials and spheres pushed by index, plus the built
//! acceleration structure over them.

use crate::aabb::Aabb;
use crate::bvh::Bvh;
use crate::material::{HitRecord, Material, MaterialKind};
use crate::sphere::Sphere;
use crate::vec3::{Color, Point3, Ray};

/// Tagged primitive kind. Only `Sphere` exists today; the tag keeps the
/// door open for future non-sphere primitives without breaking
/// `PrimitiveRef` callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Sphere,
}

#[derive(Debug, Clone, Copy)]
pub struct PrimitiveRef {
    pub kind: PrimitiveKind,
    pub index: usize,
}

/// Owns every material and sphere in a scene, plus the BVH built over them.
/// Primitives and materials are referenced by index rather than by pointer
/// so the whole store is plain data, trivially shareable across worker
/// threads behind a shared reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub materials: Vec<Material>,
    pub spheres: Vec<Sphere>,
    primitive_refs: Vec<PrimitiveRef>,
    bvh: Bvh,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_diffuse(&mut self, base_color: Color) -> usize {
        self.push_material(Material::diffuse(base_color))
    }

    /// `Metal` is `Physical` pinned to `metallic = 1.0`; see DESIGN.md.
    pub fn add_metal(&mut self, base_color: Color, roughness: f32) -> usize {
        self.push_material(Material::metal(base_color, roughness))
    }

    pub fn add_physical(&mut self, base_color: Color, metallic: f32, roughness: f32) -> usize {
        self.push_material(Material::physical(base_color, metallic, roughness))
    }

    pub fn add_dielectric(&mut self, ior: f32) -> usize {
        self.push_material(Material::dielectric(ior))
    }

    pub fn add_emissive(&mut self, emission: Color) -> usize {
        self.push_material(Material::emissive(emission))
    }

    fn push_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Adds a sphere referencing a previously added material, returning its
    /// primitive index into `self.spheres`.
    pub fn add_sphere(&mut self, center: Point3, radius: f32, material_index: usize) -> usize {
        self.spheres.push(Sphere::new(center, radius, material_index));
        let index = self.spheres.len() - 1;
        self.primitive_refs.push(PrimitiveRef { kind: PrimitiveKind::Sphere, index });
        index
    }

    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    pub fn material_kind(&self, index: usize) -> MaterialKind {
        self.materials[index].kind
    }

    /// Builds the BVH over the primitives added so far. Adding primitives
    /// after `build` without calling it again is not supported.
    pub fn build(&mut self) {
        if self.primitive_refs.is_empty() {
            log::warn!("building a scene with zero primitives; every ray will hit the background");
        }
        self.bvh = Bvh::build(&self.spheres, &self.primitive_refs);
        log::debug!("bvh built: {} nodes over {} primitives", self.bvh.node_count(), self.primitive_refs.len());
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        self.bvh.intersect(&self.spheres, &self.primitive_refs, ray, t_min, t_max)
    }

    /// The scene's root bounding box, covering every primitive. Degenerate
    /// if `build` has not been called or the scene is empty.
    pub fn bounding_box(&self) -> Aabb {
        self.bvh.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;

    #[test]
    fn single_sphere_center_pixel_hits_the_sphere() {
        let mut scene = Scene::new();
        let mat = scene.add_diffuse(Color::new(0.5, 0.5, 0.5));
        scene.add_sphere(Point3::zero(), 1.0, mat);
        scene.build();

        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.intersect(&ray, 1e-3, f32::INFINITY).unwrap();
        assert_eq!(hit.material_index, mat);
    }

    #[test]
    fn two_spheres_report_the_nearer_one() {
        let mut scene = Scene::new();
        let near_mat = scene.add_diffuse(Color::new(1.0, 0.0, 0.0));
        let far_mat = scene.add_diffuse(Color::new(0.0, 1.0, 0.0));
        scene.add_sphere(Point3::new(0.0, 0.0, 3.0), 1.0, far_mat);
        scene.add_sphere(Point3::new(0.0, 0.0, -3.0), 1.0, near_mat);
        scene.build();

        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.intersect(&ray, 1e-3, f32::INFINITY).unwrap();
        assert_eq!(hit.material_index, near_mat);
    }

    #[test]
    fn overlapping_spheres_still_report_the_nearest_surface() {
        let mut scene = Scene::new();
        let a = scene.add_diffuse(Color::new(1.0, 0.0, 0.0));
        let b = scene.add_diffuse(Color::new(0.0, 0.0, 1.0));
        scene.add_sphere(Point3::new(0.0, 0.0, 0.0), 1.0, a);
        scene.add_sphere(Point3::new(0.5, 0.0, 0.0), 1.0, b);
        scene.build();

        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.intersect(&ray, 1e-3, f32::INFINITY).unwrap();
        assert_eq!(hit.material_index, a);
    }

    #[test]
    fn empty_scene_never_reports_a_hit() {
        let mut scene = Scene::new();
        scene.build();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(scene.intersect(&ray, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn five_by_five_sphere_grid_bounding_box_covers_every_sphere() {
        let mut scene = Scene::new();
        let mat = scene.add_diffuse(Color::splat(0.5));
        for i in -2..=2 {
            for j in -2..=2 {
                scene.add_sphere(Point3::new(i as f32 * 2.0, 0.0, j as f32 * 2.0), 0.5, mat);
            }
        }
        scene.build();

        for i in -2..=2 {
            for j in -2..=2 {
                let center = Point3::new(i as f32 * 2.0, 0.0, j as f32 * 2.0);
                let ray = Ray::new(center + Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
                assert!(scene.intersect(&ray, 1e-3, f32::INFINITY).is_some());
            }
        }
    }
}
