//! Process replacement
//!
//! The one irreversible step of a launch. Kept behind a trait so the
//! decision logic can run against a recorder instead of `exec`.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

/// Replace the current process with `program`
///
/// On success this never returns. Any return is a failure, and the returned
/// error says why.
pub trait ProcessReplacer {
    fn replace(&mut self, program: &Path, argv: &[OsString]) -> io::Error;
}

/// Replaces the process through the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecReplacer;

impl ProcessReplacer for ExecReplacer {
    #[cfg(unix)]
    fn replace(&mut self, program: &Path, argv: &[OsString]) -> io::Error {
        use std::os::unix::process::CommandExt;

        let mut cmd = Command::new(program);
        if let Some((arg0, rest)) = argv.split_first() {
            cmd.arg0(arg0).args(rest);
        }
        cmd.exec()
    }

    #[cfg(not(unix))]
    fn replace(&mut self, program: &Path, argv: &[OsString]) -> io::Error {
        // No exec here: run the program in our place and leave with its status
        let status = match Command::new(program).args(argv.iter().skip(1)).status() {
            Ok(status) => status,
            Err(e) => return e,
        };
        std::process::exit(status.code().unwrap_or(1))
    }
}
