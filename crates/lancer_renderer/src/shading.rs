//! Direct lighting with a hard shadow test.
//!
//! One point light, Lambertian cosine term, inverse-square falloff and a
//! single shadow ray per shaded point. No bounces.

use crate::hittable::{trace, Hit, Hittable};
use crate::renderer::RenderConfig;
use lancer_core::{colors, Color, Scene};
use lancer_math::{Ray, Vec3};

/// Compute the color seen along a primary ray.
///
/// Returns the configured background when nothing is hit.
pub fn radiance(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    match trace(ray, scene) {
        Some(hit) => shade(ray, hit, scene, config),
        None => config.background,
    }
}

/// Shade a resolved hit.
///
/// The material behaviour tag is ignored: every surface is lit as diffuse.
/// A hit point that coincides with the light receives no light.
pub fn shade(ray: &Ray, hit: Hit, scene: &Scene, config: &RenderConfig) -> Color {
    let Some(object) = scene.get(hit.index) else {
        return config.background;
    };
    let light = scene.light();

    let x = ray.at(hit.distance);
    let to_light = light.position - x;
    let dist_sq = to_light.dot(to_light);
    if !(dist_sq > 0.0 && dist_sq.is_finite()) {
        return colors::BLACK;
    }

    let normal = object.sphere.normal_at(x);
    let light_dir = to_light.normalize_or_zero();
    let coef = normal.dot(light_dir).max(0.0) / dist_sq;
    if coef == 0.0 {
        // Facing away: the shadow ray cannot change the result
        return colors::BLACK;
    }

    let visibility = shadow_visibility(x, light_dir, dist_sq, hit.index, scene, config);
    (object.material.color * coef) * light.emission * visibility
}

/// 1.0 if nothing sits between `point` and the light, 0.0 otherwise.
///
/// The shadow ray starts `shadow_bias` along `light_dir`. A blocker counts
/// only when it is strictly closer than the light (`t² < dist_sq`).
///
/// `source` is the object `point` lies on and is never tested: a ray leaving
/// a sphere on its lit side (`n·l > 0`) cannot re-enter it.
pub fn shadow_visibility(
    point: Vec3,
    light_dir: Vec3,
    dist_sq: f32,
    source: usize,
    scene: &Scene,
    config: &RenderConfig,
) -> f32 {
    let shadow_ray = Ray::new(point + light_dir * config.shadow_bias, light_dir);

    let blocked = scene
        .objects()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != source)
        .filter_map(|(_, object)| object.intersect(&shadow_ray))
        .any(|t| t * t < dist_sq);

    if blocked {
        0.0
    } else {
        1.0
    }
}
