use crate::locator::TOP_LEVEL;

/// Formats the line number of a call site.
///
/// # Parameters
/// - `lineno`: The 1-based line, if known.
///
/// # Returns
/// `":<n>"`, or an empty string when the line is unknown.
///
/// # Example
/// ```
/// use dprint::format::format_lineno;
///
/// assert_eq!(format_lineno(Some(12)), ":12");
/// assert_eq!(format_lineno(None), "");
/// ```
#[must_use]
pub fn format_lineno(lineno: Option<u32>) -> String {
    lineno.map_or_else(String::new, |n| format!(":{n}"))
}

/// Formats the function a call site sits in.
///
/// The top-level sentinel reads as a top level statement; any other name is
/// introduced with `in`.
///
/// # Example
/// ```
/// use dprint::{format::format_function, locator::TOP_LEVEL};
///
/// assert_eq!(format_function(Some("parser::parse")), " in parser::parse");
/// assert_eq!(format_function(Some(TOP_LEVEL)), " (top level stmt)");
/// assert_eq!(format_function(None), "");
/// ```
#[must_use]
pub fn format_function(name: Option<&str>) -> String {
    match name {
        None => String::new(),
        Some(TOP_LEVEL) => " (top level stmt)".to_string(),
        Some(name) => format!(" in {name}"),
    }
}
