use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use walkdir::WalkDir;

use crate::{
    config::{self, Config},
    format::filename::normalize,
};

lazy_static! {
    static ref DEFAULT: SearchPath = SearchPath::from_config(config::current());
}

/// An ordered list of directories that contain installed source code.
///
/// Order matters: when a file lies under several entries, the first one
/// decides how the file is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Creates an empty search path.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds the search path a configuration describes.
    ///
    /// Entries come in this order:
    /// 1. the directories of `DPRINT_PATH`,
    /// 2. `RUST_SRC_PATH`,
    /// 3. each directory directly under `<cargo home>/registry/src`,
    /// 4. each directory directly under `<cargo home>/git/checkouts`.
    ///
    /// Directories inside Cargo's home are listed by name. Directories that do
    /// not exist contribute nothing.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut search_path = Self::new();

        for entry in &config.extra_paths {
            search_path.push(entry);
        }
        if let Some(rust_src) = &config.rust_src_path {
            search_path.push(rust_src);
        }
        if let Some(cargo_home) = &config.cargo_home {
            for root in [cargo_home.join("registry").join("src"),
                         cargo_home.join("git").join("checkouts")]
            {
                for dir in child_dirs(&root) {
                    search_path.push(dir);
                }
            }
        }

        log::trace!("search path: {:?}", search_path.entries);
        search_path
    }

    /// Builds the search path from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&Config::from_env())
    }

    /// Appends an entry. The entry is normalized lexically, so `a/./b/../c`
    /// and `a/c` are the same entry.
    pub fn push(&mut self, entry: impl AsRef<Path>) {
        self.entries.push(normalize(entry.as_ref()));
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type IntoIter = std::slice::Iter<'a, PathBuf>;
    type Item = &'a PathBuf;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: AsRef<Path>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut search_path = Self::new();
        for entry in iter {
            search_path.push(entry);
        }
        search_path
    }
}

/// Returns the search path of this process, built on first use.
pub fn default_search_path() -> &'static SearchPath {
    &DEFAULT
}

fn child_dirs(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root).min_depth(1)
                      .max_depth(1)
                      .sort_by_file_name()
                      .into_iter()
                      .filter_map(Result::ok)
                      .filter(|entry| entry.file_type().is_dir())
                      .map(walkdir::DirEntry::into_path)
                      .collect()
}
