//! Prints a few values from the top level of a program and from a function.
//!
//! Run with `cargo run --example top_level`:
//!
//! ```text
//! demos/top_level.rs:22 (top level stmt)
//!   x -> 5
//! demos/top_level.rs:17 in scaled
//!   value * factor -> 15
//! demos/top_level.rs:24
//!   1 -> 1
//! ```

use dprint::dprint;

fn scaled(value: i32, factor: i32) -> i32 {
    dprint!(value * factor)
}

fn main() {
    let x = 5;
    dprint!(x);

    let total = scaled(x, 3) + dprint(1);
    assert_eq!(total, 16);
}
