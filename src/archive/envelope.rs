//! Serializable metadata envelope for the archive's `META` file.
//!
//! Field names and spellings here are a wire contract with the consuming
//! icon-management application: the top-level licence dictionary is spelled
//! `licences`, the per-record reference field `licence`, and every date
//! renders as `YYYY-MM-DD HH:MM:SS` regardless of host locale.

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use crate::library::{IconType, Identifier};

/// Fixed metadata block at the head of the envelope.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub version: f64,
    pub date: String,
}

/// The complete envelope, serialized to compact JSON and gzipped into the
/// archive's `META` file.
///
/// The four dictionaries are keyed by identifier and preserve depth-first
/// traversal order, so repeated saves of the same hierarchy produce
/// byte-identical payloads (timestamps aside).
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub meta: Meta,
    pub groups: IndexMap<Identifier, GroupRecord>,
    pub sets: IndexMap<Identifier, SetRecord>,
    pub licences: IndexMap<Identifier, LicenseRecord>,
    pub items: IndexMap<Identifier, IconRecord>,
}

#[derive(Debug, Serialize)]
pub struct GroupRecord {
    pub name: String,
    pub identifier: Identifier,
    pub sort: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Identifier>,
}

#[derive(Debug, Serialize)]
pub struct SetRecord {
    pub name: String,
    pub identifier: Identifier,
    pub sort: i32,
    pub description: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<Identifier>,
}

#[derive(Debug, Serialize)]
pub struct IconRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: IconType,
    pub file: String,
    pub date: String,
    pub tags: String,
    pub identifier: Identifier,
    pub parent: Identifier,
    pub unicode: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<Identifier>,
}

#[derive(Debug, Serialize)]
pub struct LicenseRecord {
    pub name: String,
    pub identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub text: String,
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS` in 24-hour local time,
/// zero-padded and locale-independent. Falls back to the current time when
/// unset.
pub fn formatted_timestamp(time: Option<DateTime<Local>>) -> String {
    time.unwrap_or_else(Local::now)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
