//! String measurement backed by cosmic-text shaping.

use cosmic_text::{Buffer, Metrics, Shaping, Wrap};
use parking_lot::Mutex;

use circletype_core::{MetricsProvider, Size};

use crate::font::Font;
use crate::font_system::FontSystem;

/// Measures strings with real fonts.
///
/// Each call shapes the string as a single unwrapped line. The width is the
/// widest shaped line and the height is the number of lines times the font's
/// line height, so `"AV"` measured as a whole reflects the font's kerning
/// while `"A"` and `"V"` measured alone do not.
///
/// The font system sits behind a mutex so one provider can serve layouts on
/// several threads.
///
/// # Example
///
/// ```no_run
/// use circletype_core::{CircleTextEngine, LayoutConfig, Size};
/// use circletype_text::{Font, FontFamily, FontMetricsProvider};
///
/// let provider = FontMetricsProvider::new();
/// let engine = CircleTextEngine::new();
/// let font = Font::new(FontFamily::SansSerif, 15.0);
///
/// let layout = engine.layout(
///     "Round and round",
///     &font,
///     &LayoutConfig::default(),
///     Size::new(300.0, 300.0),
///     &provider,
/// );
/// assert!(!layout.is_empty());
/// ```
pub struct FontMetricsProvider {
    font_system: Mutex<FontSystem>,
}

impl FontMetricsProvider {
    /// Create a provider that loads the system fonts.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Create a provider around an existing font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system: Mutex::new(font_system),
        }
    }

    /// Run `f` with exclusive access to the font system, e.g. to load fonts.
    pub fn with_font_system_mut<R>(&self, f: impl FnOnce(&mut FontSystem) -> R) -> R {
        f(&mut *self.font_system.lock())
    }

    /// Consume the provider, returning its font system.
    pub fn into_font_system(self) -> FontSystem {
        self.font_system.into_inner()
    }

    fn shape(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let line_height = font.line_height_px();
        let metrics = Metrics::new(font.size(), line_height);

        let mut font_system = self.font_system.lock();
        let fs = font_system.inner_mut();

        let mut buffer = Buffer::new(fs, metrics);
        buffer.set_wrap(fs, Wrap::None);
        buffer.set_size(fs, None, None);
        buffer.set_text(fs, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(fs, false);

        let mut width: f32 = 0.0;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        let size = Size::new(width, lines.max(1) as f32 * line_height);
        tracing::trace!(text, width = size.width, height = size.height, "measured string");
        size
    }
}

impl Default for FontMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontMetricsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetricsProvider")
            .field("font_system", &*self.font_system.lock())
            .finish()
    }
}

impl MetricsProvider<Font> for FontMetricsProvider {
    fn measure(&self, text: &str, style: &Font) -> Size {
        self.shape(text, style)
    }
}
