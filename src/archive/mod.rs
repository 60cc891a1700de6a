//! Archive writing: compile a [`Library`] into an `.iconjar` directory.
//!
//! An archive is a directory named `<LibraryName>.iconjar` containing a
//! gzipped JSON envelope in a file named `META` and an `icons/` directory
//! with one collision-disambiguated asset per compiled icon.
//!
//! Writing is a single synchronous pass with no partial-success mode: the
//! first validation, copy, or creation failure aborts the save. Directories
//! and assets written before the failure stay on disk (no rollback); callers
//! that need atomicity should save into a temporary location and rename on
//! success.

mod compile;
mod envelope;
pub mod filename;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::IconForgeError;
use crate::library::Library;
use compile::Compiler;
use envelope::{formatted_timestamp, Envelope, Meta};

/// Extension of the archive directory.
pub const ARCHIVE_EXT: &str = "iconjar";

/// Format version tag written into the envelope's `meta` block.
pub const FORMAT_VERSION: f64 = 2.0;

/// Name of the metadata file inside the archive root.
pub const META_FILE: &str = "META";

/// Name of the asset directory inside the archive root.
pub const ICONS_DIR: &str = "icons";

/// Gzip level for the envelope. Low effort keeps writes fast and the output
/// deterministic for a given payload.
const META_COMPRESSION_LEVEL: u32 = 1;

/// Writes `library` as an archive under `destination`, returning the archive
/// root path.
///
/// The archive root `destination/<name>.iconjar` and its `icons/`
/// subdirectory are created first (a pre-existing root is a
/// [`IconForgeError::CreationFailure`]), then the tree is compiled
/// depth-first, copying every icon asset, and finally the envelope is
/// serialized, gzipped, and written to `META`.
pub fn write_archive(library: &Library, destination: &Path) -> Result<PathBuf, IconForgeError> {
    let archive_dir = destination.join(format!("{}.{}", library.name, ARCHIVE_EXT));
    create_dir(&archive_dir)?;

    let icons_dir = archive_dir.join(ICONS_DIR);
    create_dir(&icons_dir)?;

    let mut compiler = Compiler::new(&icons_dir);
    compiler.compile_children(&library.children)?;

    let envelope = Envelope {
        meta: Meta {
            version: FORMAT_VERSION,
            date: formatted_timestamp(None),
        },
        groups: compiler.groups,
        sets: compiler.sets,
        licences: compiler.licences,
        items: compiler.items,
    };
    let json = serde_json::to_vec(&envelope)?;

    let meta_path = archive_dir.join(META_FILE);
    let compressed = gzip(&json).map_err(|source| IconForgeError::CreationFailure {
        path: meta_path.clone(),
        source,
    })?;
    fs::write(&meta_path, compressed).map_err(|source| IconForgeError::CreationFailure {
        path: meta_path.clone(),
        source,
    })?;

    Ok(archive_dir)
}

impl Library {
    /// Compiles this library into an archive under `destination`.
    ///
    /// Convenience for [`write_archive`]; see there for the directory layout
    /// and failure behavior. The library itself is left untouched, so it can
    /// be saved again to another destination.
    pub fn save(&self, destination: &Path) -> Result<PathBuf, IconForgeError> {
        write_archive(self, destination)
    }
}

fn create_dir(path: &Path) -> Result<(), IconForgeError> {
    fs::create_dir(path).map_err(|source| IconForgeError::CreationFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(META_COMPRESSION_LEVEL));
    encoder.write_all(bytes)?;
    encoder.finish()
}
