//! Lancer Core - scene description for the sphere ray caster.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`
//! - **Shading inputs**: `Material`, `Behaviour`, named `colors`
//! - **Scene**: an ordered list of `Object`s plus the scene-global `Light`
//!
//! # Example
//!
//! ```
//! use lancer_core::{colors, Light, Material, Object, Scene, Sphere};
//! use lancer_math::Vec3;
//!
//! let mut scene = Scene::new(Light::new(Vec3::new(0.0, -100.0, 0.0), Vec3::splat(1.0e4))?);
//! scene.add(Object::new(
//!     Sphere::new(Vec3::new(0.0, 0.0, 50.0), 10.0)?,
//!     Material::diffuse(colors::RED),
//! ));
//! assert_eq!(scene.len(), 1);
//! # Ok::<(), lancer_core::SceneError>(())
//! ```

pub mod error;
pub mod material;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use error::SceneError;
pub use material::{colors, Behaviour, Color, Material};
pub use scene::{Light, Object, Scene};
pub use sphere::Sphere;
