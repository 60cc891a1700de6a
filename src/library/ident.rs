//! Globally unique identifiers for library entities.
//!
//! Every group, icon set, icon, and license carries an [`Identifier`]: an
//! uppercase hyphenated UUID string. Identifiers are assigned once at
//! construction and never reassigned; the archive compiler only reads them
//! to build cross-references.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A globally unique, uppercase-normalized identifier.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Generates a fresh identifier from a version-4 UUID.
    ///
    /// The randomness is cryptographic, so two calls within a process
    /// lifetime cannot plausibly collide.
    pub fn generate() -> Self {
        let mut buf = Uuid::encode_buffer();
        let rendered = Uuid::new_v4().as_hyphenated().encode_upper(&mut buf);
        Self(rendered.to_string())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value.to_uppercase())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(Identifier::generate(), Identifier::generate());
    }

    #[test]
    fn test_generate_is_uppercase_hyphenated() {
        let id = Identifier::generate();
        let s = id.as_str();
        assert_eq!(s.len(), 36);
        for (i, ch) in s.char_indices() {
            if matches!(i, 8 | 13 | 18 | 23) {
                assert_eq!(ch, '-');
            } else {
                assert!(ch.is_ascii_hexdigit());
                assert!(!ch.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_from_normalizes_case() {
        let id = Identifier::from("abc-def");
        assert_eq!(id.as_str(), "ABC-DEF");
        assert_eq!(id, Identifier::from("ABC-DEF".to_string()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Identifier::from("A1")).expect("serialize");
        assert_eq!(json, "\"A1\"");
    }
}
