//! Stars streaking across a dark gradient, respawning at the edges.
//!
//! Run with: cargo run --example starfield

use backdrop::{Backdrop, Variant};

fn main() {
    Backdrop::new(Variant::Starfield)
        .with_title("starfield backdrop")
        .run()
        .unwrap();
}
