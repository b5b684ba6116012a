//! # Premium Field
//!
//! Denser and finer-grained: 100 small, slow particles in
//! purple/violet/pink/indigo over a light purple wash.
//!
//! Run with: `cargo run --example premium`

use driftfield::{Field, FieldConfig};

fn main() {
    env_logger::init();

    if let Err(e) = Field::new(FieldConfig::premium())
        .with_title("driftfield - premium")
        .run()
    {
        eprintln!("Error: {}", e);
    }
}
