//! Ray-sphere intersection and nearest-hit resolution.

use lancer_core::{Object, Scene, Sphere};
use lancer_math::{Interval, Ray};

/// The closest intersection found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the object in scene order
    pub index: usize,
    /// Ray parameter of the intersection
    pub distance: f32,
}

/// Trait for things a ray can hit.
pub trait Hittable: Send + Sync {
    /// Nearest non-negative ray parameter where `ray` meets this object.
    ///
    /// Returns `None` on a miss, including zero-length directions.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center();
        let a = ray.direction().dot(ray.direction());
        if !(a > 0.0 && a.is_finite()) {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius() * self.radius();

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);

        // Nearest root in front of the origin
        [t0, t1].into_iter().find(|t| Interval::FORWARD.contains(*t))
    }
}

impl Hittable for Object {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.sphere.intersect(ray)
    }
}

/// Find the closest object hit by `ray`.
///
/// Scans every object; a later object only replaces the current best when it
/// is strictly closer, so the earlier object wins exact ties.
pub fn nearest_hit<H: Hittable>(ray: &Ray, objects: &[H]) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for (index, object) in objects.iter().enumerate() {
        if let Some(distance) = object.intersect(ray) {
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(Hit { index, distance });
            }
        }
    }

    closest
}

/// Resolve the nearest hit against a whole scene.
#[inline]
pub fn trace(ray: &Ray, scene: &Scene) -> Option<Hit> {
    nearest_hit(ray, scene.objects())
}
