//! Pairwise kerning derived from string measurement.
//!
//! Kerning between two adjacent characters is the difference between their
//! individual widths and the width of the pair rendered together:
//!
//! ```text
//! kerning = width(previous) + width(current) - width(previous + current)
//! ```
//!
//! A positive value means the pair condenses, a negative value means the pair
//! takes more room than its parts. Measuring three strings per pair is not
//! cheap, so results are memoized in a [`KerningCache`]. The cache is purely
//! derived: clearing it never changes a layout result.

use std::collections::HashMap;

use crate::metrics::{measure_clamped, MetricsProvider};

/// Memoized kerning values for the active text style.
///
/// Entries are keyed by the ordered character pair and all belong to a single
/// style. Asking for kerning under a different style drops every entry before
/// the new value is stored, so there is no partial invalidation.
///
/// This cache is NOT thread-safe. [`CircleTextEngine`](crate::CircleTextEngine)
/// keeps it behind a mutex.
///
/// # Example
///
/// ```
/// use circletype_core::{KerningCache, Size};
///
/// let provider = |text: &str, _: &()| match text {
///     "A" => Size::new(10.0, 12.0),
///     "V" => Size::new(10.0, 12.0),
///     "AV" => Size::new(17.0, 12.0),
///     _ => Size::ZERO,
/// };
///
/// let mut cache = KerningCache::new();
/// assert_eq!(cache.measure_kerning("A", "V", &(), &provider, true), 3.0);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KerningCache<S> {
    /// previous character -> current character -> kerning.
    entries: HashMap<String, HashMap<String, f32>>,
    /// Number of stored pairs.
    len: usize,
    /// Style every stored entry was measured with.
    active_style: Option<S>,
    stats: KerningCacheStats,
}

/// Statistics about kerning cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KerningCacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to measure (including uncached lookups).
    pub misses: u64,
    /// Times a non-empty cache was discarded.
    pub invalidations: u64,
}

impl KerningCacheStats {
    /// Fraction of lookups answered from the cache (0.0 - 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl<S> Default for KerningCache<S> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            len: 0,
            active_style: None,
            stats: KerningCacheStats::default(),
        }
    }
}

impl<S: Clone + PartialEq> KerningCache<S> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kerning between `previous` and `current` under `style`.
    ///
    /// With `caching_enabled` a stored value is returned unchanged; otherwise
    /// the value is measured through `provider` (one call per substring) and,
    /// when caching is enabled, stored. Disabled caching also discards any
    /// entries left over from earlier calls.
    pub fn measure_kerning<P>(
        &mut self,
        previous: &str,
        current: &str,
        style: &S,
        provider: &P,
        caching_enabled: bool,
    ) -> f32
    where
        P: MetricsProvider<S> + ?Sized,
    {
        if !caching_enabled {
            self.clear();
            self.stats.misses += 1;
            return compute_kerning(previous, current, style, provider);
        }

        if self.active_style.as_ref() != Some(style) {
            if !self.is_empty() {
                tracing::debug!(pairs = self.len, "text style changed, dropping kerning cache");
            }
            self.clear();
            self.active_style = Some(style.clone());
        }

        if let Some(&kerning) = self
            .entries
            .get(previous)
            .and_then(|row| row.get(current))
        {
            self.stats.hits += 1;
            return kerning;
        }

        self.stats.misses += 1;
        let kerning = compute_kerning(previous, current, style, provider);
        self.entries
            .entry(previous.to_owned())
            .or_default()
            .insert(current.to_owned(), kerning);
        self.len += 1;
        kerning
    }
}

impl<S> KerningCache<S> {
    /// Discard every entry. Never fails and may be called repeatedly.
    pub fn clear(&mut self) {
        if self.len > 0 {
            self.stats.invalidations += 1;
        }
        self.entries.clear();
        self.len = 0;
        self.active_style = None;
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The style the cached entries belong to, if any.
    pub fn active_style(&self) -> Option<&S> {
        self.active_style.as_ref()
    }

    /// Get usage statistics.
    pub fn stats(&self) -> KerningCacheStats {
        self.stats
    }

    /// Reset usage statistics without touching the entries.
    pub fn reset_stats(&mut self) {
        self.stats = KerningCacheStats::default();
    }
}

fn compute_kerning<S, P>(previous: &str, current: &str, style: &S, provider: &P) -> f32
where
    S: ?Sized,
    P: MetricsProvider<S> + ?Sized,
{
    let pair = format!("{previous}{current}");
    let pair_width = measure_clamped(provider, &pair, style).width;
    let current_width = measure_clamped(provider, current, style).width;
    let previous_width = measure_clamped(provider, previous, style).width;

    let kerning = (current_width + previous_width) - pair_width;
    tracing::trace!(previous, current, kerning, "measured kerning");
    kerning
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::types::Size;

    /// Widths per string; every string is 10 tall. Counts provider calls.
    struct TableProvider {
        calls: Cell<usize>,
    }

    impl TableProvider {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl MetricsProvider<u32> for TableProvider {
        fn measure(&self, text: &str, scale: &u32) -> Size {
            self.calls.set(self.calls.get() + 1);
            let width = match text {
                "A" => 10.0,
                "B" => 12.0,
                "AB" => 20.0,
                "T" => 8.0,
                "o" => 7.0,
                "To" => 16.0,
                other => 9.0 * other.chars().count() as f32,
            };
            Size::new(width * *scale as f32, 10.0)
        }
    }

    #[test]
    fn kerning_from_pair_widths() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();
        assert_eq!(cache.measure_kerning("A", "B", &1u32, &provider, true), 2.0);
        assert_eq!(provider.calls.get(), 3);
    }

    #[test]
    fn negative_kerning_is_preserved() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();
        // 8 + 7 - 16
        assert_eq!(cache.measure_kerning("T", "o", &1u32, &provider, true), -1.0);
        assert_eq!(cache.measure_kerning("T", "o", &1u32, &provider, true), -1.0);
    }

    #[test]
    fn cache_hit_skips_provider() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();

        cache.measure_kerning("A", "B", &1u32, &provider, true);
        cache.measure_kerning("A", "B", &1u32, &provider, true);

        assert_eq!(provider.calls.get(), 3);
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn pairs_are_ordered() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();

        let ab = cache.measure_kerning("A", "B", &1u32, &provider, true);
        let ba = cache.measure_kerning("B", "A", &1u32, &provider, true);

        assert_eq!(ab, 2.0);
        // "BA" falls back to 9px per char: 12 + 10 - 18
        assert_eq!(ba, 4.0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn style_change_invalidates_everything() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();

        cache.measure_kerning("A", "B", &1u32, &provider, true);
        cache.measure_kerning("T", "o", &1u32, &provider, true);
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.measure_kerning("A", "B", &2u32, &provider, true), 4.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.active_style(), Some(&2u32));
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn disabled_cache_matches_enabled_cache() {
        let provider = TableProvider::new();
        let mut cached = KerningCache::new();
        let mut uncached = KerningCache::new();

        for (previous, current) in [("A", "B"), ("T", "o"), ("B", "A"), ("A", "B")] {
            let a = cached.measure_kerning(previous, current, &1u32, &provider, true);
            let b = uncached.measure_kerning(previous, current, &1u32, &provider, false);
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert!(uncached.is_empty());
    }

    #[test]
    fn disabling_drops_existing_entries() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();

        cache.measure_kerning("A", "B", &1u32, &provider, true);
        cache.measure_kerning("A", "B", &1u32, &provider, false);
        assert!(cache.is_empty());
        assert_eq!(cache.active_style(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let provider = TableProvider::new();
        let mut cache = KerningCache::new();

        cache.measure_kerning("A", "B", &1u32, &provider, true);
        cache.clear();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);

        cache.reset_stats();
        assert_eq!(cache.stats(), KerningCacheStats::default());
    }
}
