//! pylaunch
//!
//! Native entry point of an app bundle. Finds the bundled Python interpreter
//! and entry script, then replaces itself with `Python launch.py`.
//! Stdout carries a single diagnostic line when the launch does not happen.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use pylaunch_core::{install_root_for_executable, launch, BundleLayout, ExecReplacer, LaunchError};
use tracing::{debug, error, warn, Level};

fn main() {
    // Logging goes to stderr, stdout is reserved for the diagnostic
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level())
        .init();

    let root = match resolve_install_root() {
        Ok(root) => root,
        Err(e) => {
            error!("{:#}", e);
            println!("{:#}", e);
            process::exit(1);
        }
    };
    debug!("install root: {}", root.display());

    let err = launch(&root, &BundleLayout::default(), Path::exists, &mut ExecReplacer);
    report(&err);
    process::exit(err.exit_code());
}

/// Dev builds trace path resolution, release builds only report failures
fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install root of the running executable, symlinks resolved
fn resolve_install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Failed to resolve executable path {:?}", exe))?;

    install_root_for_executable(&exe).ok_or_else(|| LaunchError::InstallRoot { exe }.into())
}

fn report(err: &LaunchError) {
    if err.is_fatal() {
        error!("launch failed: {}", err);
    } else {
        warn!("launch aborted: {}", err);
    }
    println!("{}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_build_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::DEBUG);
        } else {
            assert_eq!(log_level(), Level::WARN);
        }
    }

    #[test]
    fn test_install_root_of_test_binary() {
        let root = resolve_install_root().unwrap();
        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();

        assert!(root.is_dir());
        assert!(exe.starts_with(&root));
    }
}
