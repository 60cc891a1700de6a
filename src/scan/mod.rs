//! Build icon sets by scanning a directory of loose icon files.
//!
//! This is a convenience for hosts that import icons straight from disk
//! instead of constructing every [`Icon`] by hand.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::IconForgeError;
use crate::library::{Icon, IconSet, IconType};

/// Scans `directory` recursively into an [`IconSet`] named `name`.
///
/// Files whose extension maps to a known [`IconType`] become icons named
/// after their file stem; other files are skipped. Entries are visited in
/// filename order, so the resulting set is deterministic for a given
/// directory. Raster dimensions are probed from the file contents; PDF pages
/// have no probeable pixel size, so PDF icons keep 0x0 and need dimensions
/// from the caller before the set can be saved.
///
/// # Errors
///
/// Returns [`IconForgeError::Io`] when the directory walk fails and
/// [`IconForgeError::DimensionProbe`] when a raster file cannot be parsed.
pub fn scan_set(name: &str, directory: &Path) -> Result<IconSet, IconForgeError> {
    let mut set = IconSet::new(name);

    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry.map_err(|e| IconForgeError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let kind = IconType::from_path(entry.path());
        if kind == IconType::Unknown {
            continue;
        }

        let mut icon = Icon::from_path(entry.path());
        if probes_dimensions(kind) {
            let size = imagesize::size(entry.path()).map_err(|source| {
                IconForgeError::DimensionProbe {
                    path: entry.path().to_path_buf(),
                    source,
                }
            })?;
            icon.width = size.width as u32;
            icon.height = size.height as u32;
        }
        set.add_icon(icon);
    }

    Ok(set)
}

fn probes_dimensions(kind: IconType) -> bool {
    matches!(
        kind,
        IconType::Png | IconType::Gif | IconType::Webp | IconType::Ico | IconType::Icns
    )
}
