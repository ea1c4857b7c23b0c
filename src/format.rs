/// Rendering of the value being printed.
///
/// Turns any `Debug` value into text and never lets a misbehaving `Debug`
/// implementation escape into the caller's program.
pub mod value;
/// Shortening of call-site file paths.
///
/// Paths under the working directory are shown relative to it, paths inside
/// installed sources are shown as dotted module-like names, and everything
/// else is shown as an absolute path.
pub mod filename;
/// The ordered list of directories that hold installed sources.
///
/// Used only by the filename formatter to recognise library code.
pub mod search_path;
/// Formatting of the line number and enclosing function of a call site.
pub mod context;

pub use context::{format_function, format_lineno};
pub use filename::{format_filename, format_filename_in};
pub use search_path::SearchPath;
pub use value::{format_value, format_value_pretty};
