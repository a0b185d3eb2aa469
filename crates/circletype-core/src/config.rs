//! Layout configuration.
//!
//! A [`LayoutConfig`] is an immutable value handed to every
//! [`CircleTextEngine::layout`](crate::CircleTextEngine::layout) call. Hosts
//! build it with the builder-style setters or load a preset from TOML:
//!
//! ```
//! use circletype_core::{HorizontalAlignment, LayoutConfig, VerticalAlignment};
//!
//! let config = LayoutConfig::from_toml_str(r#"
//!     base-angle = -1.5707964
//!     character-spacing = 0.9
//!     horizontal-alignment = "center"
//!     vertical-alignment = "outside"
//! "#).unwrap();
//!
//! assert_eq!(config.vertical_alignment, VerticalAlignment::Outside);
//! assert_eq!(config.horizontal_alignment, HorizontalAlignment::Center);
//! assert_eq!(config.radius, None);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// How the string is positioned relative to the base angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// The string starts at the base angle.
    Left,
    /// The string is centered on the base angle.
    #[default]
    Center,
    /// The string ends at the base angle.
    Right,
}

/// How the text baseline sits relative to the nominal circle radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Glyphs hang inside the circle.
    Inside,
    /// Glyphs straddle the circle.
    #[default]
    Center,
    /// Glyphs stand on the circle, outside of it.
    Outside,
}

impl VerticalAlignment {
    /// Room reserved inside the bounding box when the radius is derived.
    ///
    /// Outside text needs its full height between the circle and the edge of
    /// the bounds, centered text half of it, inside text none.
    #[inline]
    pub fn bounds_reserve(self, text_height: f32) -> f32 {
        match self {
            VerticalAlignment::Inside => 0.0,
            VerticalAlignment::Center => text_height / 2.0,
            VerticalAlignment::Outside => text_height,
        }
    }

    /// Offset subtracted from the radius to reach the glyph centerline.
    #[inline]
    pub fn baseline_offset(self, text_height: f32) -> f32 {
        match self {
            VerticalAlignment::Inside => text_height,
            VerticalAlignment::Center => text_height / 2.0,
            VerticalAlignment::Outside => 0.0,
        }
    }
}

/// Per-call configuration for circular layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutConfig {
    /// Angular origin in radians. 0 is the positive x-axis; angles grow
    /// clockwise in screen coordinates.
    pub base_angle: f32,
    /// Multiplier on the natural spacing (1 = natural, 0.5 = half).
    pub character_spacing: f32,
    /// Mirror the text so it reads inside-out.
    pub flipped: bool,
    /// Explicit circle radius. When `None` the largest radius fitting the
    /// layout bounds is derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Position of the string relative to `base_angle`.
    pub horizontal_alignment: HorizontalAlignment,
    /// Position of the glyphs relative to the circle.
    pub vertical_alignment: VerticalAlignment,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_angle: 0.0,
            character_spacing: 1.0,
            flipped: false,
            radius: None,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base angle in radians.
    pub fn base_angle(mut self, angle: f32) -> Self {
        self.base_angle = angle;
        self
    }

    /// Set the character spacing multiplier.
    pub fn character_spacing(mut self, spacing: f32) -> Self {
        self.character_spacing = spacing;
        self
    }

    /// Set whether the text is flipped inside-out.
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// Use an explicit radius instead of deriving one from the bounds.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Derive the radius from the layout bounds.
    pub fn derived_radius(mut self) -> Self {
        self.radius = None;
        self
    }

    /// Set the horizontal alignment.
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment.
    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Check that every numeric field is usable.
    ///
    /// Layout does not call this; a config that fails validation still lays
    /// out, just not meaningfully.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.base_angle.is_finite() {
            return Err(ConfigError::NonFiniteAngle(self.base_angle));
        }
        if !self.character_spacing.is_finite() || self.character_spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing(self.character_spacing));
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::InvalidRadius(radius));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded layout config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.base_angle, 0.0);
        assert_eq!(config.character_spacing, 1.0);
        assert!(!config.flipped);
        assert_eq!(config.radius, None);
        assert_eq!(config.horizontal_alignment, HorizontalAlignment::Center);
        assert_eq!(config.vertical_alignment, VerticalAlignment::Center);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn layout_config_builder() {
        let config = LayoutConfig::new()
            .base_angle(1.0)
            .character_spacing(0.9)
            .flipped(true)
            .radius(120.0)
            .horizontal_alignment(HorizontalAlignment::Right)
            .vertical_alignment(VerticalAlignment::Inside);

        assert_eq!(config.base_angle, 1.0);
        assert_eq!(config.character_spacing, 0.9);
        assert!(config.flipped);
        assert_eq!(config.radius, Some(120.0));
        assert_eq!(config.horizontal_alignment, HorizontalAlignment::Right);
        assert_eq!(config.vertical_alignment, VerticalAlignment::Inside);

        assert_eq!(config.derived_radius().radius, None);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(matches!(
            LayoutConfig::new().character_spacing(0.0).validate(),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            LayoutConfig::new().character_spacing(f32::NAN).validate(),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            LayoutConfig::new().radius(-1.0).validate(),
            Err(ConfigError::InvalidRadius(_))
        ));
        assert!(matches!(
            LayoutConfig::new().base_angle(f32::INFINITY).validate(),
            Err(ConfigError::NonFiniteAngle(_))
        ));
        // Zero is the documented degenerate radius, not an error.
        assert!(LayoutConfig::new().radius(0.0).validate().is_ok());
    }

    #[test]
    fn vertical_alignment_offsets_are_opposite() {
        let h = 20.0;
        assert_eq!(VerticalAlignment::Inside.bounds_reserve(h), 0.0);
        assert_eq!(VerticalAlignment::Inside.baseline_offset(h), 20.0);
        assert_eq!(VerticalAlignment::Center.bounds_reserve(h), 10.0);
        assert_eq!(VerticalAlignment::Center.baseline_offset(h), 10.0);
        assert_eq!(VerticalAlignment::Outside.bounds_reserve(h), 20.0);
        assert_eq!(VerticalAlignment::Outside.baseline_offset(h), 0.0);
    }

    #[test]
    fn parse_partial_toml() {
        let config = LayoutConfig::from_toml_str(
            r#"
            flipped = true
            radius = 80.0
            horizontal-alignment = "left"
            "#,
        )
        .unwrap();

        assert!(config.flipped);
        assert_eq!(config.radius, Some(80.0));
        assert_eq!(config.horizontal_alignment, HorizontalAlignment::Left);
        assert_eq!(config.character_spacing, 1.0);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        assert!(matches!(
            LayoutConfig::from_toml_str("character-spacing = -2.0"),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            LayoutConfig::from_toml_str("vertical-alignment = \"sideways\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn toml_roundtrip_without_radius() {
        let config = LayoutConfig::new().base_angle(0.5).flipped(true);
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("radius"));
        assert_eq!(LayoutConfig::from_toml_str(&text).unwrap(), config);
    }
}
