//! BSDF sample/eval/pdf for the five material kinds.
//!
//! `sample` and `pdf` must stay in lock-step for Metal/Physical: both derive
//! the specular lobe weight from [`specular_weight`], the single function
//! responsible for that probability, so the Monte Carlo estimator never
//! divides by a pdf computed a different way than the one used to draw the
//! sample.

use std::f32::consts::PI;

use crate::material::{BsdfSample, HitRecord, Material, MaterialKind};
use crate::onb::Onb;
use crate::rng::Pcg32;
use crate::vec3::{Color, Vec3};

/// Fresnel-Schlick reflectance approximation.
fn fresnel_schlick(cos_theta: f32, f0: Color) -> Color {
    let x = (1.0 - cos_theta).clamp(0.0, 1.0);
    let x5 = x * x * x * x * x;
    f0 + (Color::ones() - f0) * x5
}

/// GGX normal distribution function.
fn distribution_ggx(n_dot_h: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

fn geometry_schlick_ggx(n_dot_x: f32, alpha: f32) -> f32 {
    let k = (alpha + 1.0).powi(2) / 8.0;
    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

fn geometry_smith(n_dot_v: f32, n_dot_l: f32, alpha: f32) -> f32 {
    geometry_schlick_ggx(n_dot_v, alpha) * geometry_schlick_ggx(n_dot_l, alpha)
}

fn ggx_alpha(roughness: f32) -> f32 {
    (roughness * roughness).max(0.001)
}

fn f0_of(material: &Material) -> Color {
    Color::splat(0.04).lerp(material.base_color, material.metallic)
}

/// Fresnel-weighted mixing probability between the specular and diffuse
/// lobes of Metal/Physical. Shared by `sample` and `pdf` so lobe selection
/// and its probability density never disagree.
fn specular_weight(material: &Material, n: Vec3, wo: Vec3) -> f32 {
    let n_dot_v = n.dot(wo).max(0.0);
    let f0 = f0_of(material);
    let f = fresnel_schlick(n_dot_v, f0);
    f.mean().clamp(0.05, 0.95)
}

fn pdf_ggx(n_dot_h: f32, v_dot_h: f32, alpha: f32) -> f32 {
    if v_dot_h > 1e-6 {
        distribution_ggx(n_dot_h, alpha) * n_dot_h / (4.0 * v_dot_h)
    } else {
        0.0
    }
}

fn pdf_cosine_diffuse(n_dot_l: f32) -> f32 {
    n_dot_l.max(0.0) / PI
}

/// Cosine-weighted hemisphere sample in local shading space (z-up).
fn sample_cosine_hemisphere(rng: &mut Pcg32) -> Vec3 {
    let u1 = rng.uniform01();
    let u2 = rng.uniform01();
    let phi = 2.0 * PI * u1;
    let r = u2.sqrt();
    Vec3::new(phi.cos() * r, phi.sin() * r, (1.0 - u2).sqrt())
}

/// GGX half-vector sample around the shading normal.
fn sample_ggx_half_vector(n: Vec3, alpha: f32, rng: &mut Pcg32) -> Vec3 {
    let u1 = rng.uniform01();
    let u2 = rng.uniform01();
    let phi = 2.0 * PI * u1;
    let cos_theta = ((1.0 - u2) / (1.0 + (alpha * alpha - 1.0) * u2)).sqrt();
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let local = Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);
    Onb::from_normal(n).to_world(local)
}

/// `f_r(wo, wi)` for the given material at the given hit. `wo` points
/// toward the previous path vertex (camera-ward); `wi` is a candidate next
/// direction. Both are unit vectors in world space.
pub fn eval(material: &Material, hit: &HitRecord, wo: Vec3, wi: Vec3) -> Color {
    let n = hit.normal;
    match material.kind {
        MaterialKind::Diffuse => {
            if n.dot(wi) > 0.0 {
                material.base_color / PI
            } else {
                Color::zero()
            }
        }
        MaterialKind::Metal | MaterialKind::Physical => {
            let n_dot_v = n.dot(wo).max(0.0);
            let n_dot_l = n.dot(wi).max(0.0);
            if n_dot_v <= 0.0 || n_dot_l <= 0.0 {
                return Color::zero();
            }
            let h = (wo + wi).normalized();
            let n_dot_h = n.dot(h).max(0.0);
            let v_dot_h = wo.dot(h).max(0.0);
            let alpha = ggx_alpha(material.roughness);

            let f0 = f0_of(material);
            let f = fresnel_schlick(v_dot_h, f0);
            let d = distribution_ggx(n_dot_h, alpha);
            let g = geometry_smith(n_dot_v, n_dot_l, alpha);

            let specular = f * d * g / (4.0 * n_dot_v * n_dot_l).max(1e-6);
            let diffuse = material.base_color * (1.0 - material.metallic) / PI;
            specular + diffuse
        }
        MaterialKind::Dielectric | MaterialKind::Emissive => Color::zero(),
    }
}

/// `p(wi | wo)` for the given material at the given hit, synchronized with
/// [`sample`]'s lobe-selection probabilities.
pub fn pdf(material: &Material, hit: &HitRecord, wo: Vec3, wi: Vec3) -> f32 {
    let n = hit.normal;
    match material.kind {
        MaterialKind::Diffuse => pdf_cosine_diffuse(n.dot(wi)),
        MaterialKind::Metal | MaterialKind::Physical => {
            let n_dot_v = n.dot(wo).max(0.0);
            let n_dot_l = n.dot(wi).max(0.0);
            if n_dot_v <= 0.0 || n_dot_l <= 0.0 {
                return 0.0;
            }
            let h = (wo + wi).normalized();
            let n_dot_h = n.dot(h).max(0.0);
            let v_dot_h = wo.dot(h).max(0.0);
            let alpha = ggx_alpha(material.roughness);
            let p_spec = specular_weight(material, n, wo);
            p_spec * pdf_ggx(n_dot_h, v_dot_h, alpha) + (1.0 - p_spec) * pdf_cosine_diffuse(n_dot_l)
        }
        MaterialKind::Dielectric | MaterialKind::Emissive => 0.0,
    }
}

/// Draws the next path direction for `material` at `hit`, given the
/// outgoing (camera-ward) direction `wo`.
pub fn sample(material: &Material, hit: &HitRecord, wo: Vec3, rng: &mut Pcg32) -> BsdfSample {
    let n = hit.normal;
    match material.kind {
        MaterialKind::Diffuse => {
            let wi = Onb::from_normal(n).to_world(sample_cosine_hemisphere(rng));
            BsdfSample { wi, f: eval(material, hit, wo, wi), pdf: pdf(material, hit, wo, wi) }
        }
        MaterialKind::Metal | MaterialKind::Physical => {
            let p_spec = specular_weight(material, n, wo);
            let alpha = ggx_alpha(material.roughness);

            let wi = if rng.uniform01() < p_spec {
                let h = sample_ggx_half_vector(n, alpha, rng);
                let wi = (-wo).reflect(h);
                if n.dot(wi) <= 0.0 {
                    return BsdfSample::invalid();
                }
                wi
            } else {
                Onb::from_normal(n).to_world(sample_cosine_hemisphere(rng))
            };

            BsdfSample { wi, f: eval(material, hit, wo, wi), pdf: pdf(material, hit, wo, wi) }
        }
        MaterialKind::Dielectric => {
            let cos_theta = wo.dot(n).min(1.0);
            let r0 = ((1.0 - material.ior) / (1.0 + material.ior)).powi(2);
            let refl_prob = r0 + (1.0 - r0) * (1.0 - cos_theta).max(0.0).powi(5);
            let eta_ratio = if hit.front_face { 1.0 / material.ior } else { material.ior };

            let sin_theta2 = (1.0 - cos_theta * cos_theta).max(0.0);
            let total_internal_reflection = eta_ratio * eta_ratio * sin_theta2 > 1.0;

            let wi = if total_internal_reflection || rng.uniform01() < refl_prob {
                (-wo).reflect(n)
            } else {
                (-wo).refract(n, eta_ratio)
            };

            BsdfSample { wi, f: Color::ones(), pdf: 1.0 }
        }
        MaterialKind::Emissive => BsdfSample::invalid(),
    }
}
