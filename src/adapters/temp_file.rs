//! Persisting literal values to files kubectl can read

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, Result};

/// Write `content` to `path`, overwriting any existing file
///
/// On failure a partially written file is removed before the write error is
/// returned.
pub fn write_temp_file(path: &Path, content: &str) -> Result<PathBuf> {
    if let Err(source) = fs::write(path, content) {
        remove_partial(path);
        return Err(Error::FileWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Wrote literal value to {}", path.display());
    Ok(path.to_path_buf())
}

fn remove_partial(path: &Path) {
    if !path.is_file() {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove partially written {}: {}", path.display(), e);
    }
}
