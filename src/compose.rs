use std::{env, fmt::Debug, path::PathBuf};

use crate::{
    config,
    extract::extract_expression,
    format::{
        SearchPath, format_filename_in, format_function, format_lineno, format_value,
        format_value_pretty, search_path::default_search_path,
    },
    locator::CallSite,
};

/// Options that shape a message.
#[derive(Debug, Clone)]
pub struct Style<'a> {
    /// Render values with `{:#?}` instead of `{:?}`.
    pub pretty:      bool,
    /// Directory that file paths are shown relative to.
    pub cwd:         Option<PathBuf>,
    /// Directories whose files are shown as installed sources.
    pub search_path: &'a SearchPath,
}

impl Style<'static> {
    /// The style of this process: pretty printing from `DPRINT_PRETTY`, the
    /// current working directory and the default search path.
    #[must_use]
    pub fn from_env() -> Self {
        Style { pretty:      config::current().pretty,
                cwd:         env::current_dir().ok(),
                search_path: default_search_path(), }
    }
}

/// Composes the message for a value printed at a call site, in the style of
/// this process.
///
/// See [`compose_message_with`] for the layout.
#[must_use]
pub fn compose_message<T: ?Sized + Debug>(value: &T, site: &CallSite) -> String {
    compose_message_with(value, site, &Style::from_env())
}

/// Composes the message for a value printed at a call site.
///
/// The message has two parts:
/// - a context line, made of the file, `:line` and ` in function`. It is
///   followed by a newline, unless it is empty;
/// - a body, `  <expression> -> <value>`, or `  -> <value>` when the
///   expression could not be recovered.
///
/// # Parameters
/// - `value`: The value being printed.
/// - `site`: Where it is printed from.
/// - `style`: How paths and the value are rendered.
///
/// # Returns
/// The message, without a trailing newline.
///
/// # Example
/// ```
/// use std::path::PathBuf;
///
/// use dprint::{
///     compose::{Style, compose_message_with},
///     format::SearchPath,
///     locator::CallSite,
/// };
///
/// let site = CallSite { file:        Some("src/main.rs".into()),
///                       line:        Some(7),
///                       function:    Some("run".into()),
///                       source_line: Some("    let y = dprint!(x + 1);".into()), };
/// let search_path = SearchPath::new();
/// let style = Style { pretty:      false,
///                     cwd:         Some(PathBuf::from("/project")),
///                     search_path: &search_path, };
///
/// assert_eq!(compose_message_with(&6, &site, &style),
///            "src/main.rs:7 in run\n  x + 1 -> 6");
/// ```
#[must_use]
pub fn compose_message_with<T: ?Sized + Debug>(value: &T, site: &CallSite, style: &Style<'_>) -> String {
    let mut context = format_filename_in(site.file.as_deref(), style.cwd.as_deref(), style.search_path);
    context.push_str(&format_lineno(site.line));
    context.push_str(&format_function(site.function.as_deref()));
    if !context.is_empty() {
        context.push('\n');
    }

    let expression = extract_expression(site.source_line.as_deref());
    let value = if style.pretty {
        format_value_pretty(value)
    } else {
        format_value(value)
    };

    let body = if expression.is_empty() {
        format!("  -> {value}")
    } else {
        format!("  {expression} -> {value}")
    };

    context + &body
}
