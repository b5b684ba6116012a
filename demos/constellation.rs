//! # Custom Constellation
//!
//! Builds a field from scratch instead of a preset: a sparse, bright
//! constellation with long links on a near-black sky.
//!
//! ## What This Demonstrates
//!
//! - `FieldConfig::new()` plus `with_*` chaining
//! - Custom palette construction
//! - Seeded spawning for a layout that is identical on every run
//!
//! Run with: `cargo run --example constellation`

use driftfield::{Background, Field, FieldConfig, LinearGradient, Palette, Rgba};

fn main() {
    env_logger::init();

    let palette = Palette::new(vec![
        Rgba::from_u8(255, 255, 255, 0.9),
        Rgba::from_u8(180, 205, 255, 0.9),
        Rgba::from_u8(255, 230, 180, 0.9),
    ]);

    let config = FieldConfig::new()
        .with_particle_count(40)
        .with_size_range(0.5, 2.0)
        .with_drift_spread(0.2)
        .with_opacity_range(0.3, 0.9)
        .with_palette(palette)
        .with_links(220.0, Rgba::from_u8(160, 180, 220, 1.0))
        .with_background(Background::Gradient(LinearGradient::two_stop(
            Rgba::from_u8(8, 10, 25, 0.4),
            Rgba::from_u8(2, 2, 8, 0.4),
        )))
        .with_clear_color(Rgba::new(0.01, 0.01, 0.03, 1.0))
        .with_seed(1977);

    if let Err(e) = Field::new(config)
        .with_title("driftfield - constellation")
        .run()
    {
        eprintln!("Error: {}", e);
    }
}
