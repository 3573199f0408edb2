//! Lancer renderer - CPU sphere ray caster.
//!
//! One primary ray per pixel, nearest-hit resolution over the scene,
//! direct lighting from a single point light with a hard shadow ray.
//! Rows are split across a fixed pool of worker threads.

mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod rows;
mod shading;

pub use camera::Camera;
pub use error::{OutputError, OutputResult, RenderError, RenderResult};
pub use hittable::{nearest_hit, trace, Hit, Hittable};
pub use output::{save_image, write_ppm, ImageFormat};
pub use renderer::{
    channel_to_u8, color_to_rgb, render, render_parallel, render_pixel, render_rows, FrameBuffer,
    RenderConfig,
};
pub use rows::{partition_rows, RowRange};
pub use shading::{radiance, shade, shadow_visibility};

/// Re-export scene and math types
pub use lancer_core::{colors, Behaviour, Color, Light, Material, Object, Scene, SceneError, Sphere};
pub use lancer_math::{Ray, Vec3};
