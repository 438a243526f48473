//! Flat-array bounding volume hierarchy over the scene's spheres.
//!
//! Built top-down with a centroid-median object split; traversed with a
//! small fixed-size stack rather than recursion, since traversal runs once
//! per bounce per sample and recursion overhead there is wasted work.

use crate::aabb::Aabb;
use crate::material::HitRecord;
use crate::scene::{PrimitiveKind, PrimitiveRef};
use crate::sphere::Sphere;
use crate::vec3::{Point3, Ray};

const STACK_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy)]
struct BvhNode {
    left: i32,
    right: i32,
    primitive_index: i32,
    bounds: Aabb,
}

impl BvhNode {
    fn is_leaf(&self) -> bool {
        self.primitive_index >= 0
    }
}

#[derive(Debug, Clone)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    root_index: i32,
}

impl Default for Bvh {
    fn default() -> Self {
        Self { nodes: Vec::new(), root_index: -1 }
    }
}

struct Entry {
    primitive_ref_index: usize,
    bounds: Aabb,
    centroid: Point3,
}

impl Bvh {
    /// Builds the hierarchy over `primitive_refs`, which index into
    /// `spheres`. Primitive order in `spheres`/`primitive_refs` is left
    /// untouched; only a local working array of entries is reordered.
    pub fn build(spheres: &[Sphere], primitive_refs: &[PrimitiveRef]) -> Self {
        if primitive_refs.is_empty() {
            return Self::default();
        }

        let mut entries: Vec<Entry> = primitive_refs
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let bounds = match r.kind {
                    PrimitiveKind::Sphere => spheres[r.index].bounds(),
                };
                let centroid = (bounds.min + bounds.max) * 0.5;
                Entry { primitive_ref_index: i, bounds, centroid }
            })
            .collect();

        let mut nodes = Vec::with_capacity(2 * primitive_refs.len());
        let len = entries.len();
        build_recursive(&mut entries, 0, len, &mut nodes);
        Self { nodes, root_index: 0 }
    }

    pub fn intersect(
        &self,
        spheres: &[Sphere],
        primitive_refs: &[PrimitiveRef],
        ray: &Ray,
        t_min: f32,
        t_max: f32,
    ) -> Option<HitRecord> {
        if self.root_index < 0 {
            return None;
        }

        let mut stack = [0i32; STACK_DEPTH];
        let mut sp = 0usize;
        stack[sp] = self.root_index;
        sp += 1;

        let mut closest = t_max;
        let mut best: Option<HitRecord> = None;

        while sp > 0 {
            sp -= 1;
            let node = &self.nodes[stack[sp] as usize];
            if !node.bounds.intersect(ray, t_min, closest) {
                continue;
            }

            if node.is_leaf() {
                let primitive_ref = &primitive_refs[node.primitive_index as usize];
                let hit = match primitive_ref.kind {
                    PrimitiveKind::Sphere => spheres[primitive_ref.index].intersect(ray, t_min, closest),
                };
                if let Some(hit) = hit {
                    closest = hit.t;
                    best = Some(hit);
                }
            } else {
                stack[sp] = node.right;
                sp += 1;
                stack[sp] = node.left;
                sp += 1;
            }
        }

        best
    }

    /// Number of nodes in the flat array, for build-time diagnostics.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root node's bounding box, covering every primitive in the
    /// hierarchy. Degenerate (never intersected) for an empty BVH.
    pub fn bounding_box(&self) -> Aabb {
        if self.root_index < 0 {
            Aabb::default()
        } else {
            self.nodes[self.root_index as usize].bounds
        }
    }
}

/// Recursively builds the subtree over `entries[start..end)`, appending
/// nodes to `nodes` and returning the index of the node just appended. The
/// parent reserves its slot before recursing so parent indices precede
/// their children in the array.
fn build_recursive(entries: &mut [Entry], start: usize, end: usize, nodes: &mut Vec<BvhNode>) -> usize {
    if end - start == 1 {
        let entry = &entries[start];
        let index = nodes.len();
        nodes.push(BvhNode {
            left: -1,
            right: -1,
            primitive_index: entry.primitive_ref_index as i32,
            bounds: entry.bounds,
        });
        return index;
    }

    let bounds = entries[start..end]
        .iter()
        .fold(Aabb::default(), |acc, e| Aabb::union(&acc, &e.bounds));
    let axis = bounds.longest_axis();

    entries[start..end].sort_by(|a, b| a.centroid[axis].partial_cmp(&b.centroid[axis]).unwrap());

    let mid = start + (end - start) / 2;
    let index = nodes.len();
    nodes.push(BvhNode { left: -1, right: -1, primitive_index: -1, bounds });

    let left = build_recursive(entries, start, mid, nodes) as i32;
    let right = build_recursive(entries, mid, end, nodes) as i32;
    nodes[index].left = left;
    nodes[index].right = right;
    nodes[index].bounds = bounds;

    index
}
