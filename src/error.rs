/// Source lookup errors.
///
/// Defines the failures that can occur while recovering the text of a call
/// site from disk: the file may be missing or unreadable, or shorter than the
/// recorded line. None of these reach the user; the locator turns them into an
/// absent source line and logs the cause.
pub mod source_error;

pub use source_error::SourceError;
