use std::{env, ffi::OsString, path::PathBuf};

use lazy_static::lazy_static;

/// Extra search-path entries, placed before everything else.
pub const PATH_VAR: &str = "DPRINT_PATH";
/// Renders values with `{:#?}` when set to anything but `0` or nothing.
pub const PRETTY_VAR: &str = "DPRINT_PRETTY";
/// Location of the standard library sources, as used by rust-analyzer.
pub const RUST_SRC_PATH_VAR: &str = "RUST_SRC_PATH";
/// Cargo's home directory.
pub const CARGO_HOME_VAR: &str = "CARGO_HOME";

lazy_static! {
    static ref CURRENT: Config = Config::from_env();
}

/// Process-wide settings, read from the environment.
///
/// Nothing here is required: an empty environment yields a configuration that
/// prints compact values and only shortens paths under the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Render values with the alternate (`{:#?}`) form.
    pub pretty:        bool,
    /// Directories from `DPRINT_PATH`, in declared order.
    pub extra_paths:   Vec<PathBuf>,
    /// Standard library sources, from `RUST_SRC_PATH`.
    pub rust_src_path: Option<PathBuf>,
    /// Cargo's home, from `CARGO_HOME` or the user's home directory.
    pub cargo_home:    Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var_os(key))
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Parameters
    /// - `lookup`: Returns the value of a variable, or `None` when unset.
    ///
    /// # Returns
    /// The configuration those variables describe.
    ///
    /// # Example
    /// ```
    /// use std::ffi::OsString;
    ///
    /// use dprint::config::Config;
    ///
    /// let config = Config::from_vars(|key| match key {
    ///                  "DPRINT_PRETTY" => Some(OsString::from("1")),
    ///                  "CARGO_HOME" => Some(OsString::from("/opt/cargo")),
    ///                  _ => None,
    ///              });
    ///
    /// assert!(config.pretty);
    /// assert_eq!(config.cargo_home, Some("/opt/cargo".into()));
    /// assert!(config.extra_paths.is_empty());
    /// ```
    pub fn from_vars(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let pretty = non_empty(PRETTY_VAR).is_some_and(|value| value != "0");

        let extra_paths = non_empty(PATH_VAR).map(|value| {
                                                  env::split_paths(&value).filter(|p| !p.as_os_str().is_empty())
                                                                          .collect()
                                              })
                                              .unwrap_or_default();

        let rust_src_path = non_empty(RUST_SRC_PATH_VAR).map(PathBuf::from);

        let cargo_home = non_empty(CARGO_HOME_VAR).map(PathBuf::from).or_else(|| {
                                                                          non_empty("HOME").or_else(|| non_empty("USERPROFILE"))
                                                                                           .map(|home| PathBuf::from(home).join(".cargo"))
                                                                      });

        Self { pretty,
               extra_paths,
               rust_src_path,
               cargo_home }
    }
}

/// Returns the configuration of this process, read on first use.
pub fn current() -> &'static Config {
    &CURRENT
}
