use std::panic::Location;

/// Reading of call-site source lines from disk.
///
/// Files are read once and kept as lines for the rest of the process, since a
/// helper called in a loop would otherwise reread the same file every time.
pub mod source;

/// The function name reported for code at the top level of a program, that is
/// the body of the crate-root `main`.
pub const TOP_LEVEL: &str = "<main>";

/// Name of the item the `enclosing_function!` macro declares to learn where it
/// was expanded.
#[doc(hidden)]
pub const HERE_MARKER: &str = "__dprint_here";

/// Everything known about the place a value was printed from.
///
/// Every field is optional on its own, and each formatter copes with its field
/// being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    /// The file as recorded by the compiler, usually relative to the
    /// workspace root for local crates.
    pub file:        Option<String>,
    /// The 1-based line of the call.
    pub line:        Option<u32>,
    /// The enclosing function, without the crate name, or [`TOP_LEVEL`].
    pub function:    Option<String>,
    /// The full source line of the call, without its line terminator.
    pub source_line: Option<String>,
}

impl CallSite {
    /// Builds a call site and looks up its source line.
    ///
    /// A source line that cannot be found is left out. The cause is only
    /// logged, at debug level.
    ///
    /// # Parameters
    /// - `file`: The path recorded by the compiler.
    /// - `line`: The 1-based line number.
    /// - `function`: The enclosing function, if known.
    /// - `manifest_dir`: The calling crate's manifest directory, used to
    ///   resolve `file` when the program runs from another directory.
    #[must_use]
    pub fn resolve(file: &str,
                   line: u32,
                   function: Option<String>,
                   manifest_dir: Option<&str>)
                   -> Self {
        let source_line = match source::locate_line(file, line, manifest_dir) {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("no source line for {file}:{line}: {e}");
                None
            },
        };

        Self { file: Some(file.to_string()),
               line: Some(line),
               function,
               source_line }
    }
}

/// Captures the call site of the nearest caller not marked
/// `#[track_caller]`.
///
/// Called from a `#[track_caller]` function, this reports that function's
/// caller, which is how [`dprint`](fn@crate::dprint) reports the code that called it
/// rather than itself. The function name is not available this way; use the
/// `capture_caller_frame!` macro when it is wanted.
///
/// # Example
/// ```
/// use dprint::capture_caller_frame;
///
/// let (site, line) = (capture_caller_frame(), line!());
///
/// assert_eq!(site.line, Some(line));
/// assert_eq!(site.function, None);
/// ```
#[track_caller]
#[must_use]
pub fn capture_caller_frame() -> CallSite {
    let location = Location::caller();
    CallSite::resolve(location.file(), location.line(), None, None)
}

/// Turns the type name of the marker item into a function path.
///
/// The marker segment, trailing closure segments and the leading crate name
/// are removed. A crate-root `main` becomes [`TOP_LEVEL`].
///
/// # Example
/// ```
/// use dprint::locator::{TOP_LEVEL, normalize_function_path};
///
/// assert_eq!(normalize_function_path("app::parser::parse::__dprint_here"),
///            "parser::parse");
/// assert_eq!(normalize_function_path("app::run::{{closure}}::__dprint_here"),
///            "run");
/// assert_eq!(normalize_function_path("app::main::__dprint_here"), TOP_LEVEL);
/// ```
#[must_use]
pub fn normalize_function_path(raw: &str) -> String {
    let mut path = raw.strip_suffix(HERE_MARKER)
                      .and_then(|p| p.strip_suffix("::"))
                      .unwrap_or(raw);

    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }

    // `<T as Trait>::method` carries no crate name up front.
    if !path.starts_with('<')
       && let Some((_, rest)) = path.split_once("::")
    {
        path = rest;
    }

    if path == "main" {
        TOP_LEVEL.to_string()
    } else {
        path.to_string()
    }
}
