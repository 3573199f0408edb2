//! Scene description.
//!
//! A scene is an ordered list of sphere objects lit by a single point
//! light. It is built once, then shared read-only by every render worker.

use std::fmt;

use lancer_math::Vec3;

use crate::error::{ensure_finite, SceneResult};
use crate::material::{colors, Color, Material};
use crate::sphere::Sphere;

/// A sphere paired with its material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub sphere: Sphere,
    pub material: Material,
}

impl Object {
    /// Create a new object.
    pub fn new(sphere: Sphere, material: Material) -> Self {
        Self { sphere, material }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.sphere.center();
        write!(
            f,
            "Object([{}, {}, {}], {}, {})",
            c.x,
            c.y,
            c.z,
            self.sphere.radius(),
            self.material
        )
    }
}

/// Point light. Scene-global, never intersected by rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light position in world space
    pub position: Vec3,
    /// Emitted radiance per channel, before inverse-square falloff
    pub emission: Color,
}

impl Light {
    /// Create a new point light.
    ///
    /// Position and emission must both be finite.
    pub fn new(position: Vec3, emission: Color) -> SceneResult<Self> {
        ensure_finite("light position", position)?;
        ensure_finite("light emission", emission)?;
        Ok(Self { position, emission })
    }
}

/// An ordered collection of objects and the light that illuminates them.
///
/// Object order is significant: when two objects are hit at exactly the same
/// distance, the one added first wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<Object>,
    light: Light,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(light: Light) -> Self {
        Self {
            objects: Vec::new(),
            light,
        }
    }

    /// Add an object and return its index.
    pub fn add(&mut self, object: Object) -> usize {
        log::debug!("Scene object {}: {}", self.objects.len(), object);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Builder-style variant of [`Scene::add`].
    pub fn with_object(mut self, object: Object) -> Self {
        self.add(object);
        self
    }

    /// All objects in insertion order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Get an object by index.
    pub fn get(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// The scene light.
    pub fn light(&self) -> &Light {
        &self.light
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The default room: a box made of five huge spheres with two
    /// diffuse spheres inside and the light hanging below the ceiling.
    ///
    /// Sized for a 1000x1000 image looking down +Z from z = 0.
    pub fn room() -> SceneResult<Self> {
        const WALL_RADIUS: f32 = 100_000.0;

        let light = Light::new(Vec3::new(500.0, 200.0, 200.0), Vec3::splat(300_000.0))?;
        let mut scene = Scene::new(light);

        scene.add(Object::new(
            Sphere::new(Vec3::new(500.0, 500.0, 500.0), 200.0)?,
            Material::diffuse(Color::new(255.0, 215.0, 0.0)),
        ));
        scene.add(Object::new(
            Sphere::new(Vec3::new(255.0, 500.0, 255.0), 100.0)?,
            Material::diffuse(Color::new(0.0, 200.0, 120.0)),
        ));

        // Walls: each surface sits 100 units inside the 0..1000 frame
        let walls = [
            (Vec3::new(900.0 + WALL_RADIUS, 500.0, 255.0), colors::RED), // right
            (Vec3::new(100.0 - WALL_RADIUS, 500.0, 255.0), colors::BLUE), // left
            (Vec3::new(500.0, 900.0 + WALL_RADIUS, 255.0), colors::WHITE), // floor
            (Vec3::new(500.0, 100.0 - WALL_RADIUS, 255.0), colors::WHITE), // ceiling
            (Vec3::new(500.0, 500.0, 900.0 + WALL_RADIUS), colors::WHITE), // back
        ];
        for (center, color) in walls {
            scene.add(Object::new(
                Sphere::new(center, WALL_RADIUS)?,
                Material::diffuse(color),
            ));
        }

        log::info!("Built room scene with {} objects", scene.len());
        Ok(scene)
    }
}
