//! # dprint
//!
//! dprint is a print-debugging helper. It prints where it was called from, the
//! source text of the expression it was given and that expression's value,
//! and then hands the value back, so it can be dropped into the middle of any
//! expression without changing what the program does.
//!
//! ```no_run
//! use dprint::dprint;
//!
//! fn main() {
//!     let width = 3;
//!     let area = dprint!(width * 4) * 2;
//!     assert_eq!(area, 24);
//! }
//! ```
//!
//! As `src/main.rs`, this prints:
//!
//! ```text
//! src/main.rs:5 (top level stmt)
//!   width * 4 -> 12
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    fmt::Debug,
    io::{self, Write},
};

/// Assembles the printed message from a value and its call site.
///
/// This module joins the formatted file, line and function into a context
/// line, and the extracted expression and formatted value into a body line.
///
/// # Responsibilities
/// - Combines every formatter into the final text.
/// - Falls back to a bare arrow when the expression cannot be recovered.
/// - Applies the process style (pretty values, working directory, search
///   path).
pub mod compose;
/// Reads the process configuration from the environment.
///
/// All settings are optional and read once. They control pretty printing and
/// where installed sources are looked for.
pub mod config;
/// Provides the error types of source lookup.
///
/// These errors never reach the caller of the helper. They describe why a
/// source line is missing, for logging.
pub mod error;
/// Recovers the argument text of a call from its source line.
///
/// # Responsibilities
/// - Tokenizes one line of Rust source.
/// - Finds the first `dprint` call and the text between its balanced
///   parentheses.
pub mod extract;
/// Turns each part of a call site, and the value, into display text.
///
/// # Responsibilities
/// - Renders values through `Debug`, surviving failing implementations.
/// - Shortens file paths relative to the working directory or installed
///   sources.
/// - Formats line numbers and function names.
pub mod format;
/// Captures call sites.
///
/// Since Rust has no runtime stack introspection, call sites are built from
/// compile-time locations, with the source line read back from disk.
///
/// # Responsibilities
/// - Defines the `CallSite` record.
/// - Captures the caller's file and line through `#[track_caller]`.
/// - Derives the enclosing function's name for the macro form.
/// - Reads and caches source lines.
pub mod locator;
mod macros;

pub use compose::compose_message;
pub use locator::{CallSite, capture_caller_frame};

/// Prints a value with its call site and source text, then returns it.
///
/// The message goes to standard output and looks like:
///
/// ```text
/// src/main.rs:12
///   width * 4 -> 12
/// ```
///
/// The function form knows the file and line of its caller but not the
/// enclosing function; the [`dprint!`] macro reports that too.
///
/// # Example
/// ```
/// use dprint::dprint;
///
/// let total = dprint(2 + 3) * 10;
///
/// assert_eq!(total, 50);
/// ```
#[track_caller]
pub fn dprint<T: Debug>(value: T) -> T {
    let site = capture_caller_frame();
    emit(&value, &site);
    value
}

/// Writes the message for `value` at `site`, followed by a newline.
///
/// # Parameters
/// - `out`: Where the message goes.
/// - `value`: The value being printed.
/// - `site`: Where it is printed from.
///
/// # Errors
/// Returns any error from writing to `out`.
///
/// # Example
/// ```
/// use dprint::{CallSite, write_message};
///
/// let mut out = Vec::new();
/// write_message(&mut out, &[1, 2], &CallSite::default()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "<unknown-file>\n  -> [1, 2]\n");
/// ```
pub fn write_message<W, T>(out: &mut W, value: &T, site: &CallSite) -> io::Result<()>
    where W: Write + ?Sized,
          T: Debug + ?Sized
{
    let message = compose_message(value, site);
    writeln!(out, "{message}")
}

/// Prints the message for `value` at `site` to standard output.
///
/// A failed write, such as a closed pipe, is logged and otherwise ignored.
#[doc(hidden)]
pub fn emit<T: Debug + ?Sized>(value: &T, site: &CallSite) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_message(&mut out, value, site) {
        log::debug!("could not write dprint message: {e}");
    }
}
