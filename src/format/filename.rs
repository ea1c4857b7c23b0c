use std::{
    env,
    path::{Component, Path, PathBuf},
};

use crate::format::search_path::{SearchPath, default_search_path};

/// Shown when the call site has no file.
pub const UNKNOWN_FILE: &str = "<unknown-file>";
/// Introduces a path found inside installed sources.
pub const INSTALLED_PREFIX: &str = "<installed> ";

/// Formats a call-site path against the process working directory and the
/// default search path.
///
/// See [`format_filename_in`] for the rules. When the working directory cannot
/// be determined, only the search path is consulted.
///
/// # Example
/// ```
/// use dprint::format::format_filename;
///
/// assert_eq!(format_filename(Some("./src/lib.rs")), "src/lib.rs");
/// assert_eq!(format_filename(None), "<unknown-file>");
/// ```
#[must_use]
pub fn format_filename(path: Option<&str>) -> String {
    let cwd = env::current_dir().ok();
    format_filename_in(path, cwd.as_deref(), default_search_path())
}

/// Formats a call-site path into its shortest unambiguous form.
///
/// The path is first made absolute against `cwd` (lexically: `.` is dropped
/// and `..` removes the previous segment). Then the first matching rule wins:
///
/// 1. Under `cwd`: the path relative to `cwd`.
/// 2. Under an entry of `search_path` (first entry in order): `<installed> `
///    followed by the relative path, with separators turned into `.` and a
///    trailing `.rs` removed.
/// 3. Otherwise: the absolute path.
///
/// # Parameters
/// - `path`: The path as recorded at the call site, if any.
/// - `cwd`: The working directory, if known.
/// - `search_path`: Directories holding installed sources.
///
/// # Returns
/// The display form of the path, or `<unknown-file>` for `None`.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use dprint::format::{SearchPath, format_filename_in};
///
/// let mut search_path = SearchPath::new();
/// search_path.push("/home/dev/.cargo/registry/src/index.crates.io-0");
///
/// let cwd = Some(Path::new("/home/dev/project"));
///
/// assert_eq!(format_filename_in(Some("src/main.rs"), cwd, &search_path),
///            "src/main.rs");
/// assert_eq!(format_filename_in(Some("/home/dev/.cargo/registry/src/index.crates.io-0/log-0.4.22/src/lib.rs"),
///                               cwd,
///                               &search_path),
///            "<installed> log-0.4.22.src.lib");
/// assert_eq!(format_filename_in(Some("/srv/other/main.rs"), cwd, &search_path),
///            "/srv/other/main.rs");
/// ```
#[must_use]
pub fn format_filename_in(path: Option<&str>,
                          cwd: Option<&Path>,
                          search_path: &SearchPath)
                          -> String {
    let Some(path) = path else {
        return UNKNOWN_FILE.to_string();
    };

    let absolute = absolutize(Path::new(path), cwd);

    if let Some(cwd) = cwd
       && let Ok(relative) = absolute.strip_prefix(normalize(cwd))
    {
        return relative.display().to_string();
    }

    for entry in search_path {
        if let Ok(relative) = absolute.strip_prefix(entry) {
            return format!("{INSTALLED_PREFIX}{}", dotted(relative));
        }
    }

    absolute.display().to_string()
}

/// Resolves `path` against `cwd` and normalizes the result lexically.
///
/// A relative path stays relative when there is no `cwd` to resolve it
/// against.
pub(crate) fn absolutize(path: &Path, cwd: Option<&Path>) -> PathBuf {
    match cwd {
        Some(cwd) if path.is_relative() => normalize(&cwd.join(path)),
        _ => normalize(path),
    }
}

/// Removes `.` segments and folds `..` into the preceding segment without
/// touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                },
                // `..` above the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }

    normalized
}

fn dotted(relative: &Path) -> String {
    let joined = relative.components()
                         .map(|component| component.as_os_str().to_string_lossy())
                         .collect::<Vec<_>>()
                         .join(".");

    match joined.strip_suffix(".rs") {
        Some(stem) => stem.to_string(),
        None => joined,
    }
}
