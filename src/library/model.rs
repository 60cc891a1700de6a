//! Core entity model for icon libraries.
//!
//! This module defines the in-memory hierarchy that the archive writer
//! compiles: a [`Library`] owns an ordered tree of [`Group`]s and
//! [`IconSet`]s, sets own [`Icon`]s, and any number of sets and icons may
//! share a [`License`]. Callers build the whole hierarchy up front; the
//! compiler only reads it.
//!
//! Ownership is a strict tree. Children are held by value and parent links
//! are plain identifier lookup keys stamped by the `add_*` methods, so a
//! group can never end up inside its own descendant subtree.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use super::ident::Identifier;
use crate::error::IconForgeError;

/// The root of an icon hierarchy and the unit of archive compilation.
///
/// The library's name becomes the archive directory name. A library holds no
/// compilation state of its own, so the same instance can be saved to any
/// number of destinations.
#[derive(Clone, Debug)]
pub struct Library {
    /// Display name, used as the archive's directory name.
    pub name: String,

    /// Top-level children in their declared order.
    pub children: Vec<Node>,
}

impl Library {
    /// Creates an empty library with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a top-level icon set.
    pub fn add_set(&mut self, set: IconSet) -> &mut Self {
        self.children.push(Node::Set(set));
        self
    }

    /// Appends a top-level group.
    pub fn add_group(&mut self, group: Group) -> &mut Self {
        self.children.push(Node::Group(group));
        self
    }
}

/// A child slot in the hierarchy: either a nested group or a leaf-level set.
#[derive(Clone, Debug)]
pub enum Node {
    Group(Group),
    Set(IconSet),
}

/// A named organizational node that may nest arbitrarily.
#[derive(Clone, Debug)]
pub struct Group {
    /// Display name.
    pub name: String,

    /// Unique identifier, assigned at construction.
    pub identifier: Identifier,

    /// Free-form description; serialized as an empty string when unset.
    pub description: String,

    /// Opaque sort payload carried through to the archive unchanged.
    pub sort: i32,

    /// Identifier of the owning group, present iff this group is nested.
    ///
    /// A lookup key only, stamped by [`Group::add_group`]; never used for
    /// traversal.
    pub parent: Option<Identifier>,

    /// Nested children in their declared order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty group with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: Identifier::generate(),
            description: String::new(),
            sort: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Appends a nested set, stamping its parent link with this group's
    /// identifier.
    pub fn add_set(&mut self, mut set: IconSet) -> &mut Self {
        set.parent = Some(self.identifier.clone());
        self.children.push(Node::Set(set));
        self
    }

    /// Appends a nested group, stamping its parent link with this group's
    /// identifier.
    pub fn add_group(&mut self, mut group: Group) -> &mut Self {
        group.parent = Some(self.identifier.clone());
        self.children.push(Node::Group(group));
        self
    }
}

/// A leaf-level container of icons.
#[derive(Clone, Debug)]
pub struct IconSet {
    /// Display name.
    pub name: String,

    /// Unique identifier, assigned at construction.
    pub identifier: Identifier,

    /// Free-form description; serialized as an empty string when unset.
    pub description: String,

    /// Shared license, if any. Any number of sets and icons may hold the
    /// same instance; the archive stores one record per distinct license.
    pub license: Option<Arc<License>>,

    /// Creation timestamp; the save time is used when unset.
    pub date: Option<DateTime<Local>>,

    /// Identifier of the owning group, present iff the set is nested.
    pub parent: Option<Identifier>,

    /// Opaque sort payload carried through to the archive unchanged.
    pub sort: i32,

    /// Contained icons in their declared order.
    pub icons: Vec<Icon>,
}

impl IconSet {
    /// Creates an empty set with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: Identifier::generate(),
            description: String::new(),
            license: None,
            date: None,
            parent: None,
            sort: 0,
            icons: Vec::new(),
        }
    }

    /// Sets the shared license for this set.
    pub fn with_license(mut self, license: Arc<License>) -> Self {
        self.license = Some(license);
        self
    }

    /// Appends an icon.
    pub fn add_icon(&mut self, icon: Icon) -> &mut Self {
        self.icons.push(icon);
        self
    }
}

/// A single icon asset.
///
/// `file_path` points at the source file on the originating filesystem;
/// `file` is the filename the asset should get inside the archive (defaulting
/// to the source basename, and renamed further if it collides with an
/// already-written asset).
#[derive(Clone, Debug)]
pub struct Icon {
    /// Display name.
    pub name: String,

    /// Path of the source asset to copy into the archive.
    pub file_path: PathBuf,

    /// Desired filename inside the archive's icon directory.
    pub file: String,

    /// Unique identifier. Generated at construction; override with
    /// [`Icon::with_identifier`] when the caller already has one.
    pub identifier: Identifier,

    /// Free-form description; serialized as an empty string when unset.
    pub description: String,

    /// Shared license, if any.
    pub license: Option<Arc<License>>,

    /// Icon format.
    pub kind: IconType,

    /// Tags in insertion order. Duplicates are collapsed at serialization.
    pub tags: Vec<String>,

    /// Raster width in pixels. May stay 0 for SVG icons.
    pub width: u32,

    /// Raster height in pixels. May stay 0 for SVG icons.
    pub height: u32,

    /// Creation timestamp; the save time is used when unset.
    pub date: Option<DateTime<Local>>,

    /// Unicode codepoint string for font-style icon sets, if any.
    pub unicode: Option<String>,
}

impl Icon {
    /// Creates an icon with the given display name, source path, and type.
    ///
    /// The archive filename defaults to the source file's basename.
    pub fn new(name: impl Into<String>, file_path: impl Into<PathBuf>, kind: IconType) -> Self {
        let file_path = file_path.into();
        let file = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name: name.into(),
            file_path,
            file,
            identifier: Identifier::generate(),
            description: String::new(),
            license: None,
            kind,
            tags: Vec::new(),
            width: 0,
            height: 0,
            date: None,
            unicode: None,
        }
    }

    /// Creates an icon from a source file, naming it after the file stem and
    /// detecting the type from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = IconType::from_path(&path);
        Self::new(name, path, kind)
    }

    /// Replaces the generated identifier with a caller-supplied one.
    pub fn with_identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Sets the raster dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the shared license for this icon.
    pub fn with_license(mut self, license: Arc<License>) -> Self {
        self.license = Some(license);
        self
    }

    /// Appends a tag.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends several tags.
    pub fn add_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Returns the tags comma-joined, with duplicates collapsed and
    /// first-seen order preserved.
    pub fn tags_string(&self) -> String {
        let mut seen = std::collections::HashSet::new();
        let mut unique = Vec::new();
        for tag in &self.tags {
            if seen.insert(tag.as_str()) {
                unique.push(tag.as_str());
            }
        }
        unique.join(",")
    }

    /// Checks the structural invariants required before an icon may enter an
    /// archive.
    ///
    /// # Errors
    ///
    /// - [`IconForgeError::InvalidType`] when the type is
    ///   [`IconType::Unknown`].
    /// - [`IconForgeError::InvalidDimensions`] when the type is a raster
    ///   format and either dimension is 0. SVG icons are exempt.
    pub fn validate(&self) -> Result<(), IconForgeError> {
        if self.kind == IconType::Unknown {
            return Err(IconForgeError::InvalidType {
                name: self.name.clone(),
            });
        }
        if self.kind != IconType::Svg && (self.width == 0 || self.height == 0) {
            return Err(IconForgeError::InvalidDimensions {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Icon file formats understood by the archive format.
///
/// Serializes as the format's numeric wire code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconType {
    #[default]
    Unknown,
    Svg,
    Png,
    Gif,
    Pdf,
    Icns,
    Webp,
    Ico,
}

impl IconType {
    /// Returns the numeric wire code for this type.
    pub fn code(self) -> i8 {
        match self {
            IconType::Unknown => -1,
            IconType::Svg => 0,
            IconType::Png => 1,
            IconType::Gif => 2,
            IconType::Pdf => 3,
            IconType::Icns => 4,
            IconType::Webp => 5,
            IconType::Ico => 6,
        }
    }

    /// Detects the type from a path's extension, case-insensitively.
    /// Unrecognized or missing extensions map to [`IconType::Unknown`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(ext) = path.as_ref().extension() else {
            return IconType::Unknown;
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "svg" => IconType::Svg,
            "png" => IconType::Png,
            "gif" => IconType::Gif,
            "pdf" => IconType::Pdf,
            "icns" => IconType::Icns,
            "webp" => IconType::Webp,
            "ico" => IconType::Ico,
            _ => IconType::Unknown,
        }
    }
}

impl Serialize for IconType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// A license shared by any number of sets and icons.
///
/// This is the only entity with shared ownership: hold it in an [`Arc`] and
/// clone the handle into every set and icon it covers. The archive stores at
/// most one record per distinct license identifier.
#[derive(Clone, Debug)]
pub struct License {
    /// Display name (e.g. "CC BY 4.0").
    pub name: String,

    /// Unique identifier, assigned at construction.
    pub identifier: Identifier,

    /// Optional URL to the license text.
    pub url: Option<String>,

    /// Optional descriptive text; serialized as an empty string when unset.
    pub description: Option<String>,
}

impl License {
    /// Creates a license with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: Identifier::generate(),
            url: None,
            description: None,
        }
    }

    /// Sets the license URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the descriptive text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_stamps_parent_identifier() {
        let mut outer = Group::new("outer");
        let mut inner = Group::new("inner");
        let set = IconSet::new("set");

        inner.add_set(set);
        let inner_id = inner.identifier.clone();
        outer.add_group(inner);

        let Node::Group(inner) = &outer.children[0] else {
            panic!("expected a group child");
        };
        assert_eq!(inner.parent.as_ref(), Some(&outer.identifier));

        let Node::Set(set) = &inner.children[0] else {
            panic!("expected a set child");
        };
        assert_eq!(set.parent.as_ref(), Some(&inner_id));
    }

    #[test]
    fn test_top_level_children_have_no_parent() {
        let mut library = Library::new("lib");
        library.add_set(IconSet::new("loose"));

        let Node::Set(set) = &library.children[0] else {
            panic!("expected a set child");
        };
        assert!(set.parent.is_none());
    }

    #[test]
    fn test_icon_file_defaults_to_basename() {
        let icon = Icon::new("Home", "/assets/home icon.png", IconType::Png);
        assert_eq!(icon.file, "home icon.png");
    }

    #[test]
    fn test_icon_from_path_detects_type_and_name() {
        let icon = Icon::from_path("/assets/Arrow-Left.SVG");
        assert_eq!(icon.kind, IconType::Svg);
        assert_eq!(icon.name, "Arrow-Left");
    }

    #[test]
    fn test_tags_string_collapses_duplicates_in_order() {
        let mut icon = Icon::new("a", "a.png", IconType::Png);
        icon.add_tags(["a", "b", "a"]);
        assert_eq!(icon.tags_string(), "a,b");

        icon.add_tag("b").add_tag("c");
        assert_eq!(icon.tags_string(), "a,b,c");
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let icon = Icon::new("x", "x.dat", IconType::Unknown).with_dimensions(10, 10);
        assert!(matches!(
            icon.validate(),
            Err(IconForgeError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_dimension_raster() {
        let icon = Icon::new("x", "x.png", IconType::Png).with_dimensions(0, 32);
        assert!(matches!(
            icon.validate(),
            Err(IconForgeError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_validate_exempts_svg_dimensions() {
        let icon = Icon::new("x", "x.svg", IconType::Svg);
        assert!(icon.validate().is_ok());
    }

    #[test]
    fn test_icon_type_codes() {
        assert_eq!(IconType::Unknown.code(), -1);
        assert_eq!(IconType::Svg.code(), 0);
        assert_eq!(IconType::Ico.code(), 6);
    }

    #[test]
    fn test_icon_type_from_path() {
        assert_eq!(IconType::from_path("a/b/icon.PNG"), IconType::Png);
        assert_eq!(IconType::from_path("glyph.webp"), IconType::Webp);
        assert_eq!(IconType::from_path("noext"), IconType::Unknown);
        assert_eq!(IconType::from_path("odd.tiff"), IconType::Unknown);
    }

    #[test]
    fn test_icon_type_serializes_as_code() {
        let json = serde_json::to_string(&IconType::Png).expect("serialize");
        assert_eq!(json, "1");
        let json = serde_json::to_string(&IconType::Unknown).expect("serialize");
        assert_eq!(json, "-1");
    }

    #[test]
    fn test_shared_license_instance() {
        let license = Arc::new(License::new("MIT").with_url("https://mit-license.org"));
        let set = IconSet::new("s").with_license(Arc::clone(&license));
        let icon = Icon::new("i", "i.png", IconType::Png).with_license(Arc::clone(&license));

        let set_id = set.license.as_ref().map(|l| l.identifier.clone());
        let icon_id = icon.license.as_ref().map(|l| l.identifier.clone());
        assert_eq!(set_id, icon_id);
    }
}
