//! Circular text layout for Circletype.
//!
//! This crate positions the characters of a string along a circle so a
//! renderer can draw each one individually, rotated to follow the curve. It
//! does no drawing and no font I/O of its own: string sizes come from a
//! [`MetricsProvider`] supplied by the host.
//!
//! # Getting Started
//!
//! ```
//! use circletype_core::{
//!     CircleTextEngine, HorizontalAlignment, LayoutConfig, Size, VerticalAlignment,
//! };
//!
//! // Any `Fn(&str, &Style) -> Size` works as a metrics provider.
//! let provider = |text: &str, font_size: &u32| {
//!     let size = *font_size as f32;
//!     Size::new(0.6 * size * text.chars().count() as f32, size)
//! };
//!
//! let engine = CircleTextEngine::new();
//! let config = LayoutConfig::new()
//!     .base_angle(-std::f32::consts::FRAC_PI_2)
//!     .character_spacing(0.9)
//!     .horizontal_alignment(HorizontalAlignment::Center)
//!     .vertical_alignment(VerticalAlignment::Outside);
//!
//! let layout = engine.layout("Circletype", &15u32, &config, Size::new(320.0, 320.0), &provider);
//!
//! for glyph in layout.glyphs() {
//!     // Draw `glyph.character` at `glyph.draw_origin()` with `glyph.transform()`.
//!     let _ = (glyph.draw_origin(), glyph.transform());
//! }
//! ```
//!
//! # Kerning Cache
//!
//! Kerning between neighbouring characters is derived from three
//! measurements per pair and memoized per engine. The cache is dropped when
//! the style changes, when caching is switched off, or on request:
//!
//! ```
//! # use circletype_core::{CircleTextEngine, LayoutConfig, Size};
//! # let provider = |text: &str, _: &()| Size::new(8.0 * text.len() as f32, 12.0);
//! let engine = CircleTextEngine::new();
//! engine.layout("abc", &(), &LayoutConfig::new(), Size::new(100.0, 100.0), &provider);
//! assert_eq!(engine.cached_pairs(), 2);
//!
//! // e.g. from a memory-pressure handler
//! engine.clear_cache();
//! assert_eq!(engine.cached_pairs(), 0);
//! ```
//!
//! # Logging
//!
//! The crate reports through `tracing` and installs no subscriber. Layout
//! summaries are emitted at `debug`, individual kerning measurements at
//! `trace`.

mod config;
mod error;
mod kerning;
mod layout;
mod metrics;
mod transform;
mod types;

pub use config::{HorizontalAlignment, LayoutConfig, VerticalAlignment};
pub use error::{ConfigError, ConfigResult};
pub use kerning::{KerningCache, KerningCacheStats};
pub use layout::{CircleLayout, CircleTextEngine, DebugGuides, GlyphGuide, PlacedGlyph};
pub use metrics::MetricsProvider;
pub use transform::Transform2D;
pub use types::{Point, Rect, Size};
