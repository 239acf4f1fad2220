//! Slow particles drifting over a faint line grid.
//!
//! Run with: cargo run --example grid

use backdrop::{Backdrop, Variant};

fn main() {
    Backdrop::new(Variant::Grid)
        .with_title("grid backdrop")
        .run()
        .unwrap();
}
