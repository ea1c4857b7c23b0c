use std::{
    error::Error,
    ffi::OsString,
    path::{Path, PathBuf},
};

use dprint::{
    config::Config,
    error::SourceError,
    format::{SearchPath, format_filename_in},
    locator::source::{locate_line, read_line},
};

const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

fn cargo_home() -> PathBuf {
    Path::new(MANIFEST_DIR).join("tests").join("cargo_home")
}

fn config_from(vars: &[(&str, &str)]) -> Config {
    Config::from_vars(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| OsString::from(*value))
    })
}

#[test]
fn empty_environment() {
    assert_eq!(config_from(&[]), Config::default());
}

#[test]
fn pretty_flag() {
    assert!(config_from(&[("DPRINT_PRETTY", "1")]).pretty);
    assert!(config_from(&[("DPRINT_PRETTY", "yes")]).pretty);
    assert!(!config_from(&[("DPRINT_PRETTY", "0")]).pretty);
    assert!(!config_from(&[("DPRINT_PRETTY", "")]).pretty);
}

#[test]
fn cargo_home_falls_back_to_home() {
    assert_eq!(config_from(&[("HOME", "/home/dev")]).cargo_home,
               Some(PathBuf::from("/home/dev/.cargo")));
    assert_eq!(config_from(&[("USERPROFILE", "/users/dev")]).cargo_home,
               Some(PathBuf::from("/users/dev/.cargo")));
    assert_eq!(config_from(&[("CARGO_HOME", "/opt/cargo"), ("HOME", "/home/dev")]).cargo_home,
               Some(PathBuf::from("/opt/cargo")));
}

#[test]
fn extra_paths_keep_their_order() {
    let joined = std::env::join_paths(["/a/src", "/b/src"]).unwrap();
    let config = config_from(&[("DPRINT_PATH", joined.to_str().unwrap())]);

    assert_eq!(config.extra_paths, [PathBuf::from("/a/src"), PathBuf::from("/b/src")]);
}

#[test]
fn search_path_order() {
    let config = Config { extra_paths: vec![PathBuf::from("/extra")],
                          rust_src_path: Some(PathBuf::from("/rust/library")),
                          cargo_home: Some(cargo_home()),
                          ..Config::default() };

    let entries: Vec<_> = SearchPath::from_config(&config).iter().cloned().collect();

    assert_eq!(entries,
               [PathBuf::from("/extra"),
                PathBuf::from("/rust/library"),
                cargo_home().join("registry/src/index.example-0000"),
                cargo_home().join("git/checkouts/tool-1a2b")]);
}

#[test]
fn missing_cargo_home_adds_nothing() {
    let config = Config { cargo_home: Some(PathBuf::from("/definitely/not/here")),
                          ..Config::default() };

    assert!(SearchPath::from_config(&config).is_empty());
}

#[test]
fn registry_sources_read_as_installed() {
    let config = Config { cargo_home: Some(cargo_home()),
                          ..Config::default() };
    let search_path = SearchPath::from_config(&config);
    let file = cargo_home().join("registry/src/index.example-0000/demo-0.1.0/src/lib.rs");

    assert_eq!(format_filename_in(file.to_str(), Some(Path::new("/elsewhere")), &search_path),
               "<installed> demo-0.1.0.src.lib");
}

#[test]
fn reads_requested_line() {
    let path = Path::new("tests/cargo_home/registry/src/index.example-0000/demo-0.1.0/src/lib.rs");

    assert_eq!(read_line(path, 2).unwrap(), "    dprint::dprint!(42)");
    assert_eq!(read_line(path, 3).unwrap(), "}");
}

#[test]
fn line_out_of_range() {
    let path = Path::new("tests/cargo_home/git/checkouts/tool-1a2b/3c4d/src/main.rs");

    for line in [0, 2] {
        match read_line(path, line) {
            Err(SourceError::LineOutOfRange { line: found, lines, .. }) => {
                assert_eq!(found, line);
                assert_eq!(lines, 1);
            },
            other => panic!("expected LineOutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn missing_file() {
    let error = read_line(Path::new("tests/no_such_file.rs"), 1).unwrap_err();

    assert!(matches!(error, SourceError::Io { .. }));
    assert!(error.source().is_some());
    assert!(error.to_string().contains("tests/no_such_file.rs"), "{error}");
}

#[test]
fn locate_falls_back_to_manifest_ancestors() {
    let nested = format!("{MANIFEST_DIR}/tests/cargo_home/git");

    assert!(read_line(Path::new("checkouts/tool-1a2b/3c4d/src/main.rs"), 1).is_err());
    assert_eq!(locate_line("checkouts/tool-1a2b/3c4d/src/main.rs", 1, Some(&nested)).unwrap(),
               "fn main() {}");
    assert_eq!(locate_line("tests/environment.rs", 1, Some(&nested)).unwrap(),
               "use std::{");
}

#[test]
fn locate_reports_first_failure() {
    let error = locate_line("nowhere/lib.rs", 1, Some(MANIFEST_DIR)).unwrap_err();

    assert!(error.to_string().contains("nowhere/lib.rs"), "{error}");
}
