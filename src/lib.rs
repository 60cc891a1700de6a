//! Iconforge: compile icon libraries into IconJar-compatible archives.
//!
//! An archive is a directory named `<LibraryName>.iconjar` holding a gzipped
//! JSON metadata envelope (`META`) and an `icons/` directory with one renamed
//! asset file per icon. Callers build a [`Library`] tree of groups, sets, and
//! icons in memory, then save it in a single pass: the compiler walks the
//! tree depth-first, links records by identifier, deduplicates shared
//! licenses, resolves asset filename collisions, and writes everything out.
//!
//! # Modules
//!
//! - [`library`]: The in-memory hierarchy (Library, Group, IconSet, Icon,
//!   License) and identifier generation
//! - [`archive`]: Archive writing, envelope assembly, and asset filename
//!   resolution
//! - [`scan`]: Building icon sets from directories of loose files
//! - [`error`]: Error types for iconforge operations
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use iconforge::{Icon, IconSet, IconType, Library, License};
//!
//! let license = Arc::new(License::new("CC BY 4.0"));
//!
//! let mut set = IconSet::new("Arrows").with_license(Arc::clone(&license));
//! set.add_icon(
//!     Icon::new("Arrow Left", "/assets/arrow-left.png", IconType::Png)
//!         .with_dimensions(64, 64)
//!         .with_license(Arc::clone(&license)),
//! );
//!
//! let mut library = Library::new("My Icons");
//! library.add_set(set);
//!
//! let archive = library.save(Path::new("/tmp"))?;
//! println!("wrote {}", archive.display());
//! # Ok::<(), iconforge::IconForgeError>(())
//! ```

pub mod archive;
pub mod error;
pub mod library;
pub mod scan;

pub use archive::write_archive;
pub use error::IconForgeError;
pub use library::{Group, Icon, IconSet, IconType, Identifier, Library, License, Node};
