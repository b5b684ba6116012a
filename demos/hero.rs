//! # Hero Field
//!
//! The banner variant: 100 particles, two slow orbit rings, and pointer
//! attraction. Move the cursor across the window and nearby particles are
//! pulled gently toward it.
//!
//! ## What This Demonstrates
//!
//! - `FieldConfig::hero()` - the interactive preset
//! - Orbit rings: a faint circle outline, a glowing point tracing it
//! - Pointer attraction: position nudge within 200 px, fading with distance
//!
//! ## Try This
//!
//! - `.with_seed(42)` for a reproducible layout
//! - `.with_pointer_attraction(false)` to watch the pure drift
//! - Resize the window: particles lazily settle back in via wraparound
//!
//! Run with: `cargo run --example hero`

use driftfield::{Field, FieldConfig};

fn main() {
    env_logger::init();

    if let Err(e) = Field::new(FieldConfig::hero())
        .with_title("driftfield - hero")
        .run()
    {
        eprintln!("Error: {}", e);
    }
}
