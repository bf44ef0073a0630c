//! Bundle layout
//!
//! Where the interpreter and the entry script live inside an application
//! package, and how the package root is found from the running executable.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Interpreter executable inside a macOS app bundle
pub const MACOS_INTERPRETER: &str =
    "Contents/Frameworks/Python.framework/Versions/Current/Resources/Python.app/Contents/MacOS/Python";

/// Entry script inside a macOS app bundle
pub const MACOS_SCRIPT: &str = "Contents/Resources/launch.py";

/// Relative locations of the bundled files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    interpreter: PathBuf,
    script: PathBuf,
}

impl BundleLayout {
    pub fn new(interpreter: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Layout of a `.app` bundle with an embedded Python.framework
    pub fn macos() -> Self {
        Self::new(MACOS_INTERPRETER, MACOS_SCRIPT)
    }

    pub fn interpreter_path(&self, root: &Path) -> PathBuf {
        root.join(&self.interpreter)
    }

    pub fn script_path(&self, root: &Path) -> PathBuf {
        root.join(&self.script)
    }
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self::macos()
    }
}

/// Derive the install root from the path of the running executable
///
/// An executable at `<root>/Contents/MacOS/<name>` belongs to the bundle at
/// `<root>`. Anything else is treated as unbundled, and its own directory is
/// the root.
pub fn install_root_for_executable(exe: &Path) -> Option<PathBuf> {
    let exe_dir = exe.parent()?;

    if exe_dir.file_name() == Some(OsStr::new("MacOS")) {
        if let Some(contents) = exe_dir.parent() {
            if contents.file_name() == Some(OsStr::new("Contents")) {
                if let Some(root) = contents.parent() {
                    return Some(root.to_path_buf());
                }
            }
        }
    }

    Some(exe_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = BundleLayout::default();
        let root = Path::new("/Applications/Thonny.app");

        assert_eq!(
            layout.interpreter_path(root),
            PathBuf::from(
                "/Applications/Thonny.app/Contents/Frameworks/Python.framework/Versions/Current/Resources/Python.app/Contents/MacOS/Python"
            )
        );
        assert_eq!(
            layout.script_path(root),
            PathBuf::from("/Applications/Thonny.app/Contents/Resources/launch.py")
        );
    }

    #[test]
    fn test_paths_follow_any_root() {
        let layout = BundleLayout::default();

        for root in ["/tmp/x", "/Users/me/My Apps/Editor.app", "/"] {
            let root = Path::new(root);
            assert!(layout.interpreter_path(root).starts_with(root));
            assert!(layout.interpreter_path(root).ends_with("Contents/MacOS/Python"));
            assert_eq!(
                layout.script_path(root).strip_prefix(root).unwrap(),
                Path::new(MACOS_SCRIPT)
            );
        }
    }

    #[test]
    fn test_custom_layout() {
        let layout = BundleLayout::new("bin/python3", "app/main.py");
        let root = Path::new("/opt/editor");

        assert_eq!(layout.interpreter_path(root), PathBuf::from("/opt/editor/bin/python3"));
        assert_eq!(layout.script_path(root), PathBuf::from("/opt/editor/app/main.py"));
    }

    #[test]
    fn test_install_root_inside_bundle() {
        let exe = Path::new("/Applications/Thonny.app/Contents/MacOS/thonny");
        assert_eq!(
            install_root_for_executable(exe),
            Some(PathBuf::from("/Applications/Thonny.app"))
        );
    }

    #[test]
    fn test_install_root_outside_bundle() {
        // MacOS without a Contents parent is not a bundle
        let exe = Path::new("/home/me/build/MacOS/pylaunch");
        assert_eq!(
            install_root_for_executable(exe),
            Some(PathBuf::from("/home/me/build/MacOS"))
        );

        let exe = Path::new("/usr/local/bin/pylaunch");
        assert_eq!(
            install_root_for_executable(exe),
            Some(PathBuf::from("/usr/local/bin"))
        );
    }

    #[test]
    fn test_install_root_without_parent() {
        assert_eq!(install_root_for_executable(Path::new("/")), None);
    }
}
