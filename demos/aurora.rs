//! # Aurora Background
//!
//! No particles at all: a teal/cyan gradient with five soft glow blobs
//! drifting on sine paths around the center, breathing between radius 20
//! and 80. The only time-driven effect in the crate.
//!
//! Run with: `cargo run --example aurora`

use driftfield::{Field, FieldConfig};

fn main() {
    env_logger::init();

    if let Err(e) = Field::new(FieldConfig::aurora())
        .with_title("driftfield - aurora")
        .run()
    {
        eprintln!("Error: {}", e);
    }
}
