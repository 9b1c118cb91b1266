//! Shared setup for the command-line tests: fixture paths and argument
//! builders that skip clap's process-level parsing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use clap::Parser;
use wing_highlight_cli::Args;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Fixtures shared with the library's integration tests.
pub fn library_fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parses a command line the way the binary would.
pub fn args<I, S>(extra: I) -> Args
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut argv = vec!["wing-highlight".to_string()];
    argv.extend(extra.into_iter().map(|s| s.as_ref().to_string()));
    Args::try_parse_from(argv).unwrap_or_else(|e| panic!("invalid test arguments: {}", e))
}

pub fn path_arg(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
