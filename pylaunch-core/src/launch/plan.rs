//! Launch plan
//!
//! Path construction and existence checks. Nothing here touches the process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::LaunchError;
use crate::layout::BundleLayout;
use crate::replace::ProcessReplacer;

/// Interpreter and entry script, both known to exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    interpreter: PathBuf,
    script: PathBuf,
}

impl LaunchPlan {
    /// Build the plan for the bundle at `root`
    ///
    /// `exists` decides whether a path is present; the interpreter is checked
    /// before the script and the first missing one is reported.
    pub fn resolve<F>(root: &Path, layout: &BundleLayout, exists: F) -> Result<Self, LaunchError>
    where
        F: Fn(&Path) -> bool,
    {
        let interpreter = layout.interpreter_path(root);
        let script = layout.script_path(root);

        log::debug!("interpreter: {}", interpreter.display());
        log::debug!("entry script: {}", script.display());

        for path in [&interpreter, &script] {
            if !exists(path) {
                return Err(LaunchError::missing(path.as_path()));
            }
        }

        Ok(Self { interpreter, script })
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Argument vector for the interpreter: `[interpreter, script]`
    pub fn argv(&self) -> Vec<OsString> {
        vec![
            self.interpreter.clone().into_os_string(),
            self.script.clone().into_os_string(),
        ]
    }

    /// Hand the process over to the interpreter
    ///
    /// Returns only if the replacement failed.
    pub fn exec<R>(&self, replacer: &mut R) -> LaunchError
    where
        R: ProcessReplacer + ?Sized,
    {
        let argv = self.argv();
        log::debug!("replacing process with {}", self.interpreter.display());

        let source = replacer.replace(&self.interpreter, &argv);
        LaunchError::replacement(self.interpreter.as_path(), source)
    }
}
