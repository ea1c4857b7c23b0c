use std::{io, path::PathBuf};

#[derive(Debug)]
/// Represents all errors that can occur while reading a call site's source
/// line.
pub enum SourceError {
    /// The source file could not be opened or decoded.
    Io {
        /// The path that was tried.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The file was read, but has no line with the requested number.
    LineOutOfRange {
        /// The path that was read.
        path:  PathBuf,
        /// The 1-based line that was requested.
        line:  u32,
        /// The number of lines the file actually has.
        lines: usize,
    },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read source file {}: {source}.", path.display())
            },

            Self::LineOutOfRange { path, line, lines } => write!(f,
                                                                 "Line {line} is out of range for {} ({lines} lines).",
                                                                 path.display()),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::LineOutOfRange { .. } => None,
        }
    }
}
