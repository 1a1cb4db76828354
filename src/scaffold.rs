//! Family tree scaffolding on the local filesystem.
//!
//! Materializes the canonical two-level directory structure for a family
//! under a base path. An existing root folder is never touched: the call
//! reports a conflict and creates nothing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::family::Family;

/// Leaf folders created under every member unit.
pub const UNIT_LEAVES: [&str; 2] = ["documents", "images"];

/// Outcome of a [`build_folder`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildStatus {
    /// The full tree was created.
    Created,
    /// The root folder already existed; nothing was created or modified.
    AlreadyExists,
}

/// Report for a single scaffolding run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub folder_name: String,
    pub root: PathBuf,
    pub status: BuildStatus,
    /// Member units materialized by this call; empty on a conflict.
    pub units: Vec<String>,
}

/// True iff a directory named `folder_name` exists directly under
/// `base_path`. A missing path is a normal `false`, not an error.
pub fn folder_exists(base_path: &Path, folder_name: &str) -> bool {
    base_path.join(folder_name).is_dir()
}

/// Create the family's directory tree under `base_path`.
///
/// Layout: `<base>/<folder_name>/<unit>/{documents,images}` with one unit
/// per family member-unit. A leading `~` in `base_path` is expanded.
/// Missing intermediates, including the base path itself, are created as
/// needed.
///
/// If the root folder already exists the call is a no-op reporting
/// [`BuildStatus::AlreadyExists`]. Creation is not transactional: on a
/// mid-tree failure, directories created so far remain on disk. The
/// existence check and the creation are separate filesystem calls, so
/// concurrent runs against the same base must be serialized by the caller.
pub fn build_folder(family: &Family, base_path: &str) -> Result<BuildReport> {
    let expanded = shellexpand::tilde(base_path);
    let base = Path::new(expanded.as_ref());
    let root = base.join(family.folder_name());

    if folder_exists(base, family.folder_name()) {
        log_status!(
            "scaffold",
            "Folder {} already exists",
            family.folder_name()
        );
        return Ok(BuildReport {
            folder_name: family.folder_name().to_string(),
            root,
            status: BuildStatus::AlreadyExists,
            units: Vec::new(),
        });
    }

    let units = family.member_units();
    for unit in &units {
        for leaf in UNIT_LEAVES {
            fs::create_dir_all(root.join(unit).join(leaf))?;
        }
    }

    log_status!(
        "scaffold",
        "Created {} with {} member unit(s) under {}",
        family.folder_name(),
        units.len(),
        base.display()
    );

    Ok(BuildReport {
        folder_name: family.folder_name().to_string(),
        root,
        status: BuildStatus::Created,
        units,
    })
}
