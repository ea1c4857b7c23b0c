use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use lazy_static::lazy_static;

use crate::error::SourceError;

lazy_static! {
    static ref FILES: Mutex<HashMap<PathBuf, Arc<[String]>>> = Mutex::new(HashMap::new());
}

/// Finds the source line of a call site.
///
/// `file` is tried as given, which resolves relative paths against the working
/// directory. If that fails and `manifest_dir` is known, `file` is tried
/// relative to the manifest directory and then to each of its ancestors, since
/// local crates record paths relative to the workspace root.
///
/// # Parameters
/// - `file`: The path recorded by the compiler.
/// - `line`: The 1-based line number.
/// - `manifest_dir`: The calling crate's manifest directory, if known.
///
/// # Returns
/// The text of the line, without its terminator.
///
/// # Errors
/// Returns the error of the first attempt when every candidate fails.
pub fn locate_line(file: &str, line: u32, manifest_dir: Option<&str>) -> Result<String, SourceError> {
    let path = Path::new(file);

    let first_error = match read_line(path, line) {
        Ok(text) => return Ok(text),
        Err(e) => e,
    };

    if path.is_relative()
       && let Some(manifest_dir) = manifest_dir
    {
        for base in Path::new(manifest_dir).ancestors() {
            if let Ok(text) = read_line(&base.join(path), line) {
                return Ok(text);
            }
        }
    }

    Err(first_error)
}

/// Reads one line of a file, using the cached contents when the file was
/// read before.
///
/// # Parameters
/// - `path`: The file to read.
/// - `line`: The 1-based line number.
///
/// # Errors
/// - `SourceError::Io` if the file cannot be read as UTF-8 text.
/// - `SourceError::LineOutOfRange` if the file has fewer lines, or `line` is
///   zero.
pub fn read_line(path: &Path, line: u32) -> Result<String, SourceError> {
    let lines = lines_of(path)?;

    usize::try_from(line).ok()
                         .and_then(|n| n.checked_sub(1))
                         .and_then(|index| lines.get(index))
                         .cloned()
                         .ok_or_else(|| SourceError::LineOutOfRange { path: path.to_path_buf(),
                                                                      line,
                                                                      lines: lines.len() })
}

fn lines_of(path: &Path) -> Result<Arc<[String]>, SourceError> {
    if let Ok(files) = FILES.lock()
       && let Some(lines) = files.get(path)
    {
        return Ok(Arc::clone(lines));
    }

    let text = fs::read_to_string(path).map_err(|source| SourceError::Io { path: path.to_path_buf(),
                                                                          source })?;
    let lines: Arc<[String]> = text.lines().map(str::to_string).collect();

    // A poisoned cache is skipped, not repaired.
    if let Ok(mut files) = FILES.lock() {
        files.insert(path.to_path_buf(), Arc::clone(&lines));
    }

    Ok(lines)
}
