//! pylaunch Core Library
//!
//! Everything the bundle launcher decides before it gives up its process:
//! - Bundle layout and install root discovery
//! - Launch planning (interpreter + entry script existence checks)
//! - Process replacement behind the `ProcessReplacer` seam

pub mod launch;
pub mod layout;
pub mod replace;

pub use launch::{launch, LaunchError, LaunchPlan};
pub use layout::{install_root_for_executable, BundleLayout};
pub use replace::{ExecReplacer, ProcessReplacer};
