//! Launch error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Python interpreter or main script not found: {}", path.display())]
    MissingBundledFile { path: PathBuf },

    #[error("execv failed for {}: {source}", program.display())]
    ProcessReplacement {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot determine install root from executable {}", exe.display())]
    InstallRoot { exe: PathBuf },
}

impl LaunchError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        LaunchError::MissingBundledFile { path: path.into() }
    }

    pub fn replacement(program: impl Into<PathBuf>, source: io::Error) -> Self {
        LaunchError::ProcessReplacement {
            program: program.into(),
            source,
        }
    }

    /// Exit status for the launcher process
    ///
    /// A bundle with missing files ends with 0, the same as the launchers
    /// already shipped.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::MissingBundledFile { .. } => 0,
            LaunchError::ProcessReplacement { .. } | LaunchError::InstallRoot { .. } => 1,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.exit_code() != 0
    }
}
