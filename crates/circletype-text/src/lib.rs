//! Font-backed string measurement for circular text layout.
//!
//! This crate plugs real fonts into [`circletype_core`]. It provides a
//! [`Font`] style key and a [`FontMetricsProvider`] that shapes strings with
//! cosmic-text, so kerning measured by the layout engine matches what the
//! font actually does.
//!
//! # Getting Started
//!
//! ```no_run
//! use std::f32::consts::FRAC_PI_2;
//!
//! use circletype_core::{
//!     CircleTextEngine, HorizontalAlignment, LayoutConfig, Size, VerticalAlignment,
//! };
//! use circletype_text::{Font, FontFamily, FontMetricsProvider};
//!
//! let provider = FontMetricsProvider::new();
//! let engine = CircleTextEngine::new();
//!
//! let font = Font::new(FontFamily::SansSerif, 15.0);
//! let config = LayoutConfig::new()
//!     .base_angle(-FRAC_PI_2)
//!     .character_spacing(0.9)
//!     .horizontal_alignment(HorizontalAlignment::Center)
//!     .vertical_alignment(VerticalAlignment::Outside);
//!
//! let layout = engine.layout("Hello", &font, &config, Size::new(200.0, 200.0), &provider);
//! for glyph in &layout {
//!     println!("{} at {:?}", glyph.character, glyph.center);
//! }
//! ```
//!
//! # Loading Fonts
//!
//! System fonts are loaded by default. Additional fonts can be added through
//! the provider's font system:
//!
//! ```no_run
//! use circletype_text::FontMetricsProvider;
//!
//! let provider = FontMetricsProvider::new();
//! provider
//!     .with_font_system_mut(|fs| fs.load_font_file("assets/AmericanTypewriter.ttf"))
//!     .expect("font should load");
//! ```

mod font;
mod font_system;
mod measure;
mod types;

pub use font::{DEFAULT_LINE_HEIGHT, Font, FontBuilder};
pub use font_system::{FontLoadError, FontSystem, FontSystemConfig};
pub use measure::FontMetricsProvider;
pub use types::{FontFamily, FontStretch, FontStyle, FontWeight};
