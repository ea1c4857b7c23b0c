//! Runs as its own `main`, so calls here sit at the top level of a program.

use dprint::{capture_caller_frame, compose_message, dprint, locator::TOP_LEVEL};

fn main() {
    let site = capture_caller_frame!();
    assert_eq!(site.function.as_deref(), Some(TOP_LEVEL));
    assert_eq!(site.file.as_deref(), Some(file!()));

    let x = 5;
    let message = compose_message(&dprint!(x), &capture_caller_frame!());

    assert!(message.starts_with("tests/crate_root_main.rs:"), "{message}");
    assert!(message.ends_with(" (top level stmt)\n  x -> 5"), "{message}");

    let y = dprint!(x);
    assert_eq!(y, 5);
}
