//! Font description used as the text style key.

use std::hash::{Hash, Hasher};

use super::types::{FontFamily, FontStretch, FontStyle, FontWeight};

/// Line height as a multiple of the font size when none is given.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// A complete font description: family, size and the attributes that
/// change how wide or tall text measures.
///
/// `Font` is the style key of [`FontMetricsProvider`](crate::FontMetricsProvider),
/// so it holds exactly the attributes that go into shaping: two fonts compare
/// equal precisely when they measure the same. Missing glyphs are resolved by
/// cosmic-text's own fallback. Sizes are compared by bit pattern, which makes
/// `Font` usable as a hash key.
///
/// # Example
///
/// ```
/// use circletype_text::{Font, FontFamily, FontWeight};
///
/// let font = Font::new(FontFamily::SansSerif, 15.0);
///
/// let styled = Font::builder()
///     .family(FontFamily::name("American Typewriter"))
///     .size(15.0)
///     .weight(FontWeight::BOLD)
///     .build();
///
/// assert_ne!(font, styled);
/// assert_eq!(font, Font::new(FontFamily::SansSerif, 15.0));
/// ```
#[derive(Debug, Clone)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
    stretch: FontStretch,
    line_height: f32,
}

impl Font {
    /// Create a new font with the given family and size in pixels.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            stretch: FontStretch::Normal,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Create a font builder.
    pub fn builder() -> FontBuilder {
        FontBuilder::new()
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn stretch(&self) -> FontStretch {
        self.stretch
    }

    /// Line height multiplier.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Height of one line of text in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.size * self.line_height
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Convert to cosmic-text Attrs for text shaping.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family().to_cosmic())
            .weight(self.weight.to_cosmic())
            .style(self.style.to_cosmic())
            .stretch(self.stretch.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 16.0)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.size.to_bits() == other.size.to_bits()
            && self.weight == other.weight
            && self.style == other.style
            && self.stretch == other.stretch
            && self.line_height.to_bits() == other.line_height.to_bits()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size.to_bits().hash(state);
        self.weight.hash(state);
        self.style.hash(state);
        self.stretch.hash(state);
        self.line_height.to_bits().hash(state);
    }
}

/// Builder for [`Font`].
#[derive(Debug, Clone, Default)]
pub struct FontBuilder {
    family: Option<FontFamily>,
    size: Option<f32>,
    weight: FontWeight,
    style: FontStyle,
    stretch: FontStretch,
    line_height: Option<f32>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the font size in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = Some(multiplier);
        self
    }

    /// Build the font.
    ///
    /// Defaults to SansSerif at 16px with a 1.2 line height.
    pub fn build(self) -> Font {
        Font {
            family: self.family.unwrap_or_default(),
            size: self.size.unwrap_or(16.0),
            weight: self.weight,
            style: self.style,
            stretch: self.stretch,
            line_height: self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT),
        }
    }
}
