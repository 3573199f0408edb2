//! Camera for primary ray generation.

use crate::error::{RenderError, RenderResult};
use lancer_math::{Ray, Vec3};

/// Fixed pinhole-like camera looking down +Z from the z = 0 plane.
///
/// Pixel `(x, y)` sits at world `(x, y, 0)`. Its ray points at a focal
/// point `focal_distance` ahead, pushed away from the image center by the
/// `opening` factor, so rays fan out slightly towards the image edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Lens settings
    opening: f32,
    focal_distance: f32,

    // Image center in pixel units
    center_x: f32,
    center_y: f32,
}

impl Camera {
    pub const DEFAULT_OPENING: f32 = 1.05;
    pub const DEFAULT_FOCAL_DISTANCE: f32 = 100.0;

    /// Create a camera for a `width` x `height` image with the default lens.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        Ok(Self {
            image_width: width,
            image_height: height,
            opening: Self::DEFAULT_OPENING,
            focal_distance: Self::DEFAULT_FOCAL_DISTANCE,
            center_x: width as f32 / 2.0,
            center_y: height as f32 / 2.0,
        })
    }

    /// Set lens settings.
    ///
    /// `opening` must be greater than 1 and `focal_distance` positive.
    pub fn with_lens(mut self, opening: f32, focal_distance: f32) -> RenderResult<Self> {
        if !(opening > 1.0 && opening.is_finite()) {
            return Err(RenderError::InvalidOpening(opening));
        }
        if !(focal_distance > 0.0 && focal_distance.is_finite()) {
            return Err(RenderError::InvalidFocalDistance(focal_distance));
        }

        self.opening = opening;
        self.focal_distance = focal_distance;
        Ok(self)
    }

    pub fn opening(&self) -> f32 {
        self.opening
    }

    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    /// Generate the primary ray for pixel `(x, y)`.
    ///
    /// The direction is unit length.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let (x, y) = (x as f32, y as f32);
        let pixel = Vec3::new(x, y, 0.0);
        let focal_point = Vec3::new(
            self.center_x + (x - self.center_x) * self.opening,
            self.center_y + (y - self.center_y) * self.opening,
            self.focal_distance,
        );

        Ray::new(pixel, (focal_point - pixel).normalize_or_zero())
    }
}
