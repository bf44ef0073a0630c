//! Launch module
//!
//! Turns an install root into a verified interpreter + script pair and hands
//! the process over to it.

mod error;
mod plan;

pub use error::LaunchError;
pub use plan::LaunchPlan;

use std::path::Path;

use crate::layout::BundleLayout;
use crate::replace::ProcessReplacer;

/// Resolve the bundle under `root` and replace the process with its interpreter
///
/// Only comes back when the launch did not happen.
pub fn launch<F, R>(root: &Path, layout: &BundleLayout, exists: F, replacer: &mut R) -> LaunchError
where
    F: Fn(&Path) -> bool,
    R: ProcessReplacer + ?Sized,
{
    match LaunchPlan::resolve(root, layout, exists) {
        Ok(plan) => plan.exec(replacer),
        Err(e) => e,
    }
}
