use anyhow::{Context, Result, anyhow};
use log::{trace, warn};
use std::{ffi::OsString, fs, path::Path};

use esmfix_core::TEMP_FILE_SUFFIX;

/// Replaces the file at `path` with `content`.
///
/// Symlinks are resolved first so the link target is rewritten and the link
/// itself survives. The content goes to a hidden sibling and is renamed over
/// the target, so readers see either the old file or the new one.
pub fn write_content(path: &Path, content: &str) -> Result<()> {
    let target =
        fs::canonicalize(path).with_context(|| format!("Failed to resolve {}", path.display()))?;
    let file_name =
        target.file_name().ok_or_else(|| anyhow!("{} has no file name", target.display()))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(TEMP_FILE_SUFFIX);
    let tmp = target.with_file_name(tmp_name);

    trace!("Writing {} via {}", target.display(), tmp.display());
    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;

    match fs::metadata(&target) {
        Ok(meta) => {
            if let Err(e) = fs::set_permissions(&tmp, meta.permissions()) {
                warn!("Could not keep permissions of {}: {}", target.display(), e);
            }
        }
        Err(e) => warn!("Could not read permissions of {}: {}", target.display(), e),
    }

    if let Err(e) = fs::rename(&tmp, &target) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace {}", target.display()));
    }
    Ok(())
}
