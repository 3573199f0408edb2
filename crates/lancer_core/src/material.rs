//! Surface materials.

use std::fmt;

use lancer_math::Vec3;

/// Color type alias (RGB channels on a 0-255 scale)
pub type Color = Vec3;

/// Named constant colors.
pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);
    pub const RED: Color = Color::new(255.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 255.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 255.0);
    pub const MAGENTA: Color = Color::new(255.0, 0.0, 255.0);
}

/// How a surface interacts with light.
///
/// Only `Diffuse` is evaluated by the shader. `Glass` and `Mirror` are
/// accepted so scenes can be tagged ahead of reflection/refraction support,
/// and shade exactly like `Diffuse` for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behaviour {
    #[default]
    Diffuse,
    Glass,
    Mirror,
}

impl Behaviour {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behaviour::Diffuse => "Diffuse",
            Behaviour::Glass => "Glass",
            Behaviour::Mirror => "Mirror",
        }
    }
}

impl fmt::Display for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reflectance color plus behaviour tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance (0-255 per channel)
    pub color: Color,
    /// Behaviour tag
    pub behaviour: Behaviour,
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(colors::BLACK)
    }
}

impl Material {
    /// Create a new material.
    pub fn new(color: Color, behaviour: Behaviour) -> Self {
        Self { color, behaviour }
    }

    /// Create a diffuse material with the given reflectance.
    pub fn diffuse(color: Color) -> Self {
        Self::new(color, Behaviour::Diffuse)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Material([{}, {}, {}], {})",
            self.color.x, self.color.y, self.color.z, self.behaviour
        )
    }
}
