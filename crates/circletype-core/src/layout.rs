//! Circular text layout.
//!
//! [`CircleTextEngine::layout`] places every character of a string on a
//! circle centered in the layout bounds. The engine only computes positions:
//! for each character it emits a [`PlacedGlyph`] holding a center point, a
//! rotation and the measured size, and the host draws it.
//!
//! # Algorithm
//!
//! The string is measured as a whole to resolve the radius and the start
//! angle. Characters are then walked left to right while keeping a running
//! horizontal pixel offset (the arc-length position). Each offset is turned
//! into an angle with a fixed radians-per-pixel factor, so the text keeps its
//! natural proportions along the arc, including the kerning the metrics
//! provider applies between neighbours.
//!
//! Emission stops once the string has swept a full clockwise revolution; the
//! rest of the string is dropped rather than drawn over the start of the
//! text. Text advancing counter-clockwise is never cut.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{HorizontalAlignment, LayoutConfig, VerticalAlignment};
use crate::kerning::{KerningCache, KerningCacheStats};
use crate::metrics::{measure_clamped, MetricsProvider};
use crate::transform::Transform2D;
use crate::types::{Point, Rect, Size};

/// A single character positioned on the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph {
    /// The character (an extended grapheme cluster) to draw.
    pub character: String,
    /// Center of the glyph's baseline on the text circle.
    pub center: Point,
    /// Rotation in radians to apply around `center`.
    pub rotation: f32,
    /// Measured size of the character.
    pub size: Size,
}

impl PlacedGlyph {
    /// Top-left origin for renderers that draw text from the top-left corner.
    ///
    /// The glyph's bottom center sits on `center`, so the origin is shifted
    /// left by half the width and up by the full height. Draw at this point
    /// with [`transform`](Self::transform) applied.
    #[inline]
    pub fn draw_origin(&self) -> Point {
        Point::new(
            self.center.x - self.size.width / 2.0,
            self.center.y - self.size.height,
        )
    }

    /// The unrotated box the glyph is drawn into.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let origin = self.draw_origin();
        Rect::new(origin.x, origin.y, self.size.width, self.size.height)
    }

    /// Rotation around the glyph center, to be applied while drawing.
    #[inline]
    pub fn transform(&self) -> Transform2D {
        Transform2D::rotate_around(self.rotation, self.center)
    }
}

/// The result of a circular layout pass.
///
/// Holds the placed glyphs in reading order together with the geometry they
/// were resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleLayout {
    glyphs: Vec<PlacedGlyph>,
    center: Point,
    radius: f32,
    text_radius: f32,
    angle_per_pixel: f32,
    start_angle: f32,
    string_size: Size,
    truncated: bool,
}

impl CircleLayout {
    /// The placed glyphs in reading order.
    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    /// Take ownership of the placed glyphs.
    pub fn into_glyphs(self) -> Vec<PlacedGlyph> {
        self.glyphs
    }

    /// Iterate over the placed glyphs.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedGlyph> {
        self.glyphs.iter()
    }

    /// Number of placed glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if no glyph was placed.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Center of the circle (the center of the layout bounds).
    pub fn center(&self) -> Point {
        self.center
    }

    /// The resolved circle radius, before vertical alignment.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius the glyph centers were placed on.
    pub fn text_radius(&self) -> f32 {
        self.text_radius
    }

    /// Radians per horizontal pixel of text. Negative when flipped, zero for
    /// a degenerate radius.
    pub fn angle_per_pixel(&self) -> f32 {
        self.angle_per_pixel
    }

    /// Angle at which the string starts.
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Measured size of the whole string.
    pub fn string_size(&self) -> Size {
        self.string_size
    }

    /// Whether characters were dropped because the text went all the way
    /// around the circle.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Visual guides for debugging a layout.
    pub fn guides(&self) -> DebugGuides {
        let c = self.center;
        let r = self.radius;
        DebugGuides {
            circle_center: c,
            circle_radius: r,
            vertical_axis: (Point::new(c.x, c.y - r), Point::new(c.x, c.y + r)),
            horizontal_axis: (Point::new(c.x - r, c.y), Point::new(c.x + r, c.y)),
            glyphs: self
                .glyphs
                .iter()
                .map(|glyph| GlyphGuide {
                    anchor: glyph.center,
                    bounds: glyph.bounds(),
                    rotation: glyph.rotation,
                })
                .collect(),
        }
    }
}

impl IntoIterator for CircleLayout {
    type Item = PlacedGlyph;
    type IntoIter = std::vec::IntoIter<PlacedGlyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.into_iter()
    }
}

impl<'a> IntoIterator for &'a CircleLayout {
    type Item = &'a PlacedGlyph;
    type IntoIter = std::slice::Iter<'a, PlacedGlyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

/// Geometry for a debug overlay of a layout.
///
/// Contains the reference circle at the unadjusted radius, its two diameters
/// and, per glyph, the anchor point and the box the glyph is drawn into.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugGuides {
    pub circle_center: Point,
    pub circle_radius: f32,
    /// Vertical diameter (top, bottom).
    pub vertical_axis: (Point, Point),
    /// Horizontal diameter (left, right).
    pub horizontal_axis: (Point, Point),
    pub glyphs: Vec<GlyphGuide>,
}

/// Debug geometry for one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphGuide {
    /// The glyph center on the text circle.
    pub anchor: Point,
    /// Unrotated draw box; rotate it by `rotation` around `anchor`.
    pub bounds: Rect,
    pub rotation: f32,
}

/// Lays out text along a circle.
///
/// The engine owns the kerning cache for style `S`. It is safe to share
/// between threads: the cache is locked for the duration of a layout call.
///
/// # Example
///
/// ```
/// use circletype_core::{CircleTextEngine, LayoutConfig, Size};
///
/// // 10px per character, 20px tall, no kerning.
/// let provider = |text: &str, _: &()| Size::new(10.0 * text.chars().count() as f32, 20.0);
///
/// let engine = CircleTextEngine::new();
/// let config = LayoutConfig::new().radius(100.0);
/// let layout = engine.layout("Hello", &(), &config, Size::new(240.0, 240.0), &provider);
///
/// assert_eq!(layout.len(), 5);
/// for glyph in &layout {
///     let distance = glyph.center.distance(layout.center());
///     assert!((distance - layout.text_radius()).abs() < 1e-3);
/// }
/// ```
#[derive(Debug)]
pub struct CircleTextEngine<S> {
    cache: Mutex<KerningCache<S>>,
    caching_enabled: AtomicBool,
}

impl<S> Default for CircleTextEngine<S> {
    fn default() -> Self {
        Self {
            cache: Mutex::new(KerningCache::default()),
            caching_enabled: AtomicBool::new(true),
        }
    }
}

impl<S: Clone + PartialEq> CircleTextEngine<S> {
    /// Create an engine with kerning caching enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with kerning caching switched on or off.
    pub fn with_caching(enabled: bool) -> Self {
        let engine = Self::default();
        engine.caching_enabled.store(enabled, Ordering::Relaxed);
        engine
    }

    /// Lay out `text` on a circle centered in `bounds`.
    ///
    /// Never fails. Empty text gives an empty layout, a radius or text
    /// radius of exactly zero places every glyph at the circle center with
    /// zero rotation, and text longer than the circumference is cut after the
    /// character that completes a clockwise revolution. Counter-clockwise
    /// text (flipped, or a negative text radius) is emitted in full.
    pub fn layout<P>(
        &self,
        text: &str,
        style: &S,
        config: &LayoutConfig,
        bounds: Size,
        provider: &P,
    ) -> CircleLayout
    where
        P: MetricsProvider<S> + ?Sized,
    {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        if text.is_empty() {
            let radius = resolve_radius(config, bounds, 0.0);
            return CircleLayout {
                glyphs: Vec::new(),
                center,
                radius,
                text_radius: radius,
                angle_per_pixel: 0.0,
                start_angle: config.base_angle,
                string_size: Size::ZERO,
                truncated: false,
            };
        }

        let string_size = measure_clamped(provider, text, style);
        let radius = resolve_radius(config, bounds, string_size.height);

        let mut text_radius =
            radius - config.vertical_alignment.baseline_offset(string_size.height);
        if config.flipped {
            text_radius += string_size.height;
        }

        // A zero circle has no circumference to spread the text over.
        let degenerate = radius == 0.0 || text_radius == 0.0;
        let angle_per_pixel = if degenerate {
            tracing::debug!(radius, "zero text radius, placing glyphs at the center");
            0.0
        } else {
            let direction = if config.flipped { -1.0 } else { 1.0 };
            config.character_spacing / text_radius * direction
        };

        let start_angle = match config.horizontal_alignment {
            HorizontalAlignment::Left => config.base_angle,
            HorizontalAlignment::Center => {
                config.base_angle - string_size.width * angle_per_pixel / 2.0
            }
            HorizontalAlignment::Right => config.base_angle - string_size.width * angle_per_pixel,
        };

        let flip_rotation = if config.flipped { PI } else { 0.0 };
        // The flag is read under the lock so a concurrent disable cannot
        // interleave with this pass.
        let mut cache = self.cache.lock();
        let caching_enabled = self.caching_enabled.load(Ordering::Relaxed);

        let mut glyphs = Vec::new();
        let mut truncated = false;
        let mut position = 0.0_f32;
        let mut previous: Option<&str> = None;
        let mut characters = text.graphemes(true).peekable();

        while let Some(character) = characters.next() {
            let size = measure_clamped(provider, character, style);
            let kerning = previous.map_or(0.0, |previous| {
                cache.measure_kerning(previous, character, style, provider, caching_enabled)
            });

            position += size.width / 2.0 - kerning;

            let (glyph_center, rotation) = if degenerate {
                (center, 0.0)
            } else {
                let angle = position * angle_per_pixel + start_angle;
                (
                    Point::on_circle(center, text_radius, angle),
                    angle + FRAC_PI_2 + flip_rotation,
                )
            };

            glyphs.push(PlacedGlyph {
                character: character.to_owned(),
                center: glyph_center,
                rotation,
                size,
            });

            position += size.width / 2.0;

            // Signed: text advancing counter-clockwise (flipped, or a
            // negative text radius) never completes a revolution here.
            if position * angle_per_pixel >= TAU {
                truncated = characters.peek().is_some();
                break;
            }

            previous = Some(character);
        }
        drop(cache);

        tracing::debug!(
            glyphs = glyphs.len(),
            truncated,
            radius,
            text_radius,
            angle_per_pixel,
            "laid out circular text"
        );

        CircleLayout {
            glyphs,
            center,
            radius,
            text_radius,
            angle_per_pixel,
            start_angle,
            string_size,
            truncated,
        }
    }
}

impl<S> CircleTextEngine<S> {
    /// Drop every cached kerning value.
    ///
    /// Hosts call this on memory pressure. Always succeeds.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
        tracing::debug!("kerning cache cleared");
    }

    /// Switch kerning caching on or off. Switching it off clears the cache.
    pub fn set_caching_enabled(&self, enabled: bool) {
        let mut cache = self.cache.lock();
        self.caching_enabled.store(enabled, Ordering::Relaxed);
        if !enabled {
            cache.clear();
            tracing::debug!("kerning caching disabled, cache cleared");
        }
    }

    /// Whether kerning values are cached between calls.
    pub fn caching_enabled(&self) -> bool {
        self.caching_enabled.load(Ordering::Relaxed)
    }

    /// Number of character pairs currently cached.
    pub fn cached_pairs(&self) -> usize {
        self.cache.lock().len()
    }

    /// Kerning cache statistics.
    pub fn cache_stats(&self) -> KerningCacheStats {
        self.cache.lock().stats()
    }
}

/// The explicit radius, or the largest one that keeps the text inside the
/// bounds for the configured vertical alignment.
fn resolve_radius(config: &LayoutConfig, bounds: Size, text_height: f32) -> f32 {
    config
        .radius
        .unwrap_or_else(|| maximum_radius(bounds, text_height, config.vertical_alignment))
}

fn maximum_radius(bounds: Size, text_height: f32, alignment: VerticalAlignment) -> f32 {
    bounds.min_side() / 2.0 - alignment.bounds_reserve(text_height)
}
