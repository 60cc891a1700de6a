//! Depth-first compilation of a library tree into flat output dictionaries.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::envelope::{formatted_timestamp, GroupRecord, IconRecord, LicenseRecord, SetRecord};
use super::filename::unique_filename;
use crate::error::IconForgeError;
use crate::library::{Group, Icon, IconSet, Identifier, License, Node};

/// Accumulator state for one compilation pass.
///
/// A `Compiler` lives for exactly one archive write and owns the four flat
/// dictionaries the envelope is assembled from. Keeping this state out of
/// [`crate::library::Library`] leaves the library reusable across saves.
pub struct Compiler<'a> {
    icons_dir: &'a Path,
    pub groups: IndexMap<Identifier, GroupRecord>,
    pub sets: IndexMap<Identifier, SetRecord>,
    pub licences: IndexMap<Identifier, LicenseRecord>,
    pub items: IndexMap<Identifier, IconRecord>,
}

impl<'a> Compiler<'a> {
    /// Creates a compiler that copies icon assets into `icons_dir`.
    pub fn new(icons_dir: &'a Path) -> Self {
        Self {
            icons_dir,
            groups: IndexMap::new(),
            sets: IndexMap::new(),
            licences: IndexMap::new(),
            items: IndexMap::new(),
        }
    }

    /// Compiles a sequence of children in their declared order.
    ///
    /// Dictionary insertion order follows the depth-first traversal, which
    /// keeps repeated saves of the same hierarchy byte-identical.
    pub fn compile_children(&mut self, children: &[Node]) -> Result<(), IconForgeError> {
        for child in children {
            match child {
                Node::Set(set) => self.compile_set(set)?,
                Node::Group(group) => self.compile_group(group)?,
            }
        }
        Ok(())
    }

    fn compile_set(&mut self, set: &IconSet) -> Result<(), IconForgeError> {
        let licence = set.license.as_deref().map(|l| self.register_license(l));
        let record = SetRecord {
            name: set.name.clone(),
            identifier: set.identifier.clone(),
            sort: set.sort,
            description: set.description.clone(),
            date: formatted_timestamp(set.date),
            parent: set.parent.clone(),
            licence,
        };
        self.sets.insert(set.identifier.clone(), record);

        for icon in &set.icons {
            self.compile_icon(icon, &set.identifier)?;
        }
        Ok(())
    }

    /// Compiles one icon owned by the set identified by `parent`.
    ///
    /// Validation runs first and aborts the whole pass on failure; the asset
    /// copy happens after the record is stored, so a copy failure also aborts
    /// before the envelope is ever written.
    fn compile_icon(&mut self, icon: &Icon, parent: &Identifier) -> Result<(), IconForgeError> {
        icon.validate()?;

        let filename = unique_filename(&icon.file, self.icons_dir);
        let licence = icon.license.as_deref().map(|l| self.register_license(l));
        let record = IconRecord {
            name: icon.name.clone(),
            width: icon.width,
            height: icon.height,
            kind: icon.kind,
            file: filename.clone(),
            date: formatted_timestamp(icon.date),
            tags: icon.tags_string(),
            identifier: icon.identifier.clone(),
            parent: parent.clone(),
            unicode: icon.unicode.clone().unwrap_or_default(),
            description: icon.description.clone(),
            licence,
        };
        self.items.insert(icon.identifier.clone(), record);

        // The copy materializes the resolved name on disk, so the next
        // resolution in this pass probes against it.
        let dst = self.icons_dir.join(&filename);
        fs::copy(&icon.file_path, &dst).map_err(|source| IconForgeError::CopyFailure {
            src: icon.file_path.clone(),
            dst,
            source,
        })?;
        Ok(())
    }

    fn compile_group(&mut self, group: &Group) -> Result<(), IconForgeError> {
        let record = GroupRecord {
            name: group.name.clone(),
            identifier: group.identifier.clone(),
            sort: group.sort,
            description: group.description.clone(),
            parent: group.parent.clone(),
        };
        self.groups.insert(group.identifier.clone(), record);

        self.compile_children(&group.children)
    }

    /// Registers a license record, deduplicating by identifier.
    ///
    /// The first registration wins; later registrations of the same
    /// identifier are no-ops even when their field values differ. Returns the
    /// license's identifier either way.
    fn register_license(&mut self, license: &License) -> Identifier {
        if !self.licences.contains_key(&license.identifier) {
            self.licences.insert(
                license.identifier.clone(),
                LicenseRecord {
                    name: license.name.clone(),
                    identifier: license.identifier.clone(),
                    url: license.url.clone(),
                    text: license.description.clone().unwrap_or_default(),
                },
            );
        }
        license.identifier.clone()
    }
}
