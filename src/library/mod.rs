//! In-memory icon library model.
//!
//! A [`Library`] is the root of an ordered tree of [`Group`]s and
//! [`IconSet`]s; sets own [`Icon`]s and any number of sets and icons may
//! share a [`License`]. Build the hierarchy with the `add_*` methods, then
//! hand the library to [`crate::archive::write_archive`] (or call
//! [`Library::save`]).

mod ident;
mod model;

pub use ident::Identifier;
pub use model::{Group, Icon, IconSet, IconType, Library, License, Node};
