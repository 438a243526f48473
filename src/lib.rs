//! photontrace: a physically based Monte Carlo path tracer for scenes built
//! from spheres, rendered tile-parallel to a gamma-corrected PPM image.
//!
//! ## Architecture
//!
//! - **Geometry**: [`sphere`] (analytic intersection) accelerated by a flat
//!   [`bvh`] built with a centroid-median object split.
//! - **Shading**: [`material`] and [`bsdf`] implement diffuse, metal,
//!   physically-based conductor/dielectric mixture, perfect dielectric, and
//!   emissive surfaces with synchronized sample/eval/pdf.
//! - **Integration**: [`tracer`] iteratively carries throughput across
//!   bounces until the path escapes, is absorbed, or hits an emitter.
//! - **Scheduling**: [`tile`] partitions the image; [`renderer`] spawns
//!   worker threads that each draw from a per-worker [`rng::Pcg32`] stream.
//!
//! ```text
//!   L_o(p, w_o) = L_e(p, w_o) + integral[ f_r(p, w_i, w_o) * L_i(p, w_i) * |cos theta_i| dw_i ]
//! ```

pub mod aabb;
pub mod bsdf;
pub mod bvh;
pub mod camera;
pub mod demos;
pub mod error;
pub mod film;
pub mod material;
pub mod onb;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod sphere;
pub mod tile;
pub mod tracer;
pub mod vec3;
