//! The string measurement seam.
//!
//! The engine never looks at fonts. Everything it knows about glyph sizes
//! comes from a [`MetricsProvider`], which a host implements on top of its
//! text stack (see the `circletype-text` crate for a cosmic-text backend).

use crate::types::Size;

/// Measures strings under a text style.
///
/// `S` is the style key: whatever identifies font, size and the other
/// attributes that change measured size. Implementations must be
/// deterministic for a fixed `(text, style)` pair and should return
/// non-negative sizes.
///
/// Any `Fn(&str, &S) -> Size` closure is a provider:
///
/// ```
/// use circletype_core::{MetricsProvider, Size};
///
/// // A monospace provider: 8px per character, 16px tall.
/// let mono = |text: &str, _style: &()| Size::new(8.0 * text.chars().count() as f32, 16.0);
/// assert_eq!(mono.measure("abc", &()), Size::new(24.0, 16.0));
/// ```
pub trait MetricsProvider<S: ?Sized> {
    /// Measure `text` rendered with `style` on a single line.
    fn measure(&self, text: &str, style: &S) -> Size;
}

impl<S: ?Sized, F> MetricsProvider<S> for F
where
    F: Fn(&str, &S) -> Size,
{
    #[inline]
    fn measure(&self, text: &str, style: &S) -> Size {
        self(text, style)
    }
}

/// Measure through a provider, clamping negative or NaN sizes to zero.
pub(crate) fn measure_clamped<S, P>(provider: &P, text: &str, style: &S) -> Size
where
    S: ?Sized,
    P: MetricsProvider<S> + ?Sized,
{
    let size = provider.measure(text, style);
    let clamped = size.non_negative();
    if clamped != size {
        tracing::trace!(text, ?size, "clamped invalid measurement");
    }
    clamped
}
