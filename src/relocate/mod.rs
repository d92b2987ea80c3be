//! Namespace relocation for extracted projects.
//!
//! - **`directory`**: moves `java/<old/namespace>` to `java/<new/namespace>`
//!   and prunes the ancestors left empty.
//! - **`declaration`**: rewrites the `package` line of every Kotlin/Java source.

pub mod declaration;
pub mod directory;

pub use declaration::fix_package_declarations;
pub use directory::{Relocation, RelocationPlan};

use crate::error::Result;
use std::path::Path;

/// Moves the namespace directory of `project_root` from `old_namespace` to
/// `new_namespace`. Returns `None` when both resolve to the same directory.
pub fn relocate_namespace(
    project_root: &Path,
    old_namespace: &str,
    new_namespace: &str,
) -> Result<Option<Relocation>> {
    match RelocationPlan::new(project_root, old_namespace, new_namespace)? {
        Some(plan) => plan.execute().map(Some),
        None => {
            log::debug!("Namespace directory unchanged, nothing to relocate");
            Ok(None)
        }
    }
}
