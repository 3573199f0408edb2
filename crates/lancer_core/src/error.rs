use thiserror::Error;

/// Errors raised while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Non-finite {what}: [{x}, {y}, {z}]")]
    NonFinite {
        what: &'static str,
        x: f32,
        y: f32,
        z: f32,
    },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Reject vectors with NaN or infinite components.
pub(crate) fn ensure_finite(what: &'static str, v: lancer_math::Vec3) -> SceneResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite {
            what,
            x: v.x,
            y: v.y,
            z: v.z,
        })
    }
}
