//! # Ambient Field
//!
//! The site-wide backdrop: 70 particles in indigo/violet/emerald/sky over a
//! near-transparent light-gray gradient wash.
//!
//! Run with: `cargo run --example ambient`

use driftfield::{Field, FieldConfig};

fn main() {
    env_logger::init();

    if let Err(e) = Field::new(FieldConfig::ambient())
        .with_title("driftfield - ambient")
        .run()
    {
        eprintln!("Error: {}", e);
    }
}
