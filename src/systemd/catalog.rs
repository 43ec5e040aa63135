// Unit-file directory enumeration

use crate::error::{Result, SysviewError};
use std::path::PathBuf;

/// Enumerates the unit names the status board reports on.
///
/// The source of truth is the unit-file directory itself, not systemd's
/// runtime unit list: a unit file that exists on disk is reported even when
/// systemd refuses to load it.
pub struct UnitCatalog {
    dir: PathBuf,
}

impl UnitCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List manageable unit names, in directory order.
    ///
    /// Direct children only, base names only. Skipped entries:
    /// instantiated templates (name contains `@`), "wants" dependency
    /// directories, and drop-in `.d` directories.
    pub fn list_units(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            SysviewError::Discovery(format!("{}: {}", self.dir.display(), e))
        })?;

        let mut units = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SysviewError::Discovery(format!("{}: {}", self.dir.display(), e))
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.contains('@') || name.contains("wants") || name.ends_with(".d") {
                continue;
            }
            units.push(name);
        }
        Ok(units)
    }
}
