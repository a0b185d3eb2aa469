//! Lay out a sentence around a circle and print where every glyph lands.
//!
//! Run with: cargo run -p circletype-text --example print_circle
//!
//! An optional first argument points at a TOML layout preset.

use std::f32::consts::FRAC_PI_2;

use circletype_core::{
    CircleTextEngine, HorizontalAlignment, LayoutConfig, Size, VerticalAlignment,
};
use circletype_text::{Font, FontFamily, FontMetricsProvider};

const TEXT: &str =
    "XMCircleType allows you to display a circled text. It will take kerning into account.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::new()
            .base_angle(-FRAC_PI_2)
            .character_spacing(0.9)
            .horizontal_alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Outside),
    };

    let provider = FontMetricsProvider::new();
    let engine = CircleTextEngine::new();
    let font = Font::new(FontFamily::SansSerif, 15.0);
    let bounds = Size::new(320.0, 320.0);

    let layout = engine.layout(TEXT, &font, &config, bounds, &provider);

    println!(
        "radius {:.1}, text radius {:.1}, {} glyphs{}",
        layout.radius(),
        layout.text_radius(),
        layout.len(),
        if layout.is_truncated() { " (truncated)" } else { "" },
    );
    for glyph in &layout {
        println!(
            "{:>4} at ({:7.2}, {:7.2}) rotated {:6.1} deg",
            format!("{:?}", glyph.character),
            glyph.center.x,
            glyph.center.y,
            glyph.rotation.to_degrees(),
        );
    }

    // Same text again: every kerning pair now comes from the cache.
    engine.layout(TEXT, &font, &config, bounds, &provider);
    let stats = engine.cache_stats();
    println!(
        "kerning cache: {} pairs, hit rate {:.0}%",
        engine.cached_pairs(),
        stats.hit_rate() * 100.0
    );

    Ok(())
}
