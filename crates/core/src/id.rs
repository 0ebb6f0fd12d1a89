//! Strongly-typed document identifiers.
//!
//! Every collection is keyed by a MongoDB ObjectId, but a comment id must never
//! be passed where an item id is expected, so each collection gets its own
//! newtype. On the wire (JSON) identifiers are 24-character hex strings.

use core::cmp::Ordering;
use core::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Number of hex digits in a textual ObjectId.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Returns `true` when `s` is exactly 24 hexadecimal digits.
///
/// This is the only accepted textual form; 12-byte raw strings are rejected.
pub fn is_valid_object_id(s: &str) -> bool {
    s.len() == OBJECT_ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Identifier of a comment document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(ObjectId);

/// Identifier of a user document (the "seller" of an item or comment).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

/// Identifier of a marketplace item document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(ObjectId);

macro_rules! impl_object_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Generate a fresh identifier (timestamp + counter, roughly creation ordered).
            pub fn new() -> Self {
                Self(ObjectId::new())
            }

            pub fn from_object_id(oid: ObjectId) -> Self {
                Self(oid)
            }

            pub fn as_object_id(&self) -> &ObjectId {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $t {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.bytes().cmp(&other.0.bytes())
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0.to_hex())
            }
        }

        impl From<ObjectId> for $t {
            fn from(value: ObjectId) -> Self {
                Self(value)
            }
        }

        impl From<$t> for ObjectId {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if !is_valid_object_id(s) {
                    return Err(DomainError::invalid_id(format!(
                        "{}: expected {} hex digits, got {:?}",
                        $name, OBJECT_ID_HEX_LEN, s
                    )));
                }
                let oid = ObjectId::parse_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(oid))
            }
        }

        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_object_id_newtype!(CommentId, "CommentId");
impl_object_id_newtype!(UserId, "UserId");
impl_object_id_newtype!(ItemId, "ItemId");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_lowercase_and_uppercase_hex() {
        let lower: CommentId = "507f1f77bcf86cd799439011".parse().unwrap();
        let upper: CommentId = "507F1F77BCF86CD799439011".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn rejects_twelve_byte_strings() {
        // Twelve arbitrary bytes are a valid ObjectId for some drivers; not here.
        assert!("aaaaaaaaaaaa".parse::<ItemId>().is_err());
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "not-an-id", "507f1f77bcf86cd79943901g", "507f1f77bcf86cd7994390111"] {
            let err = s.parse::<UserId>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "{s}: {err:?}");
        }
    }

    #[test]
    fn serializes_as_hex_string() {
        let id: ItemId = "507f1f77bcf86cd799439011".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("507f1f77bcf86cd799439011"));

        let back: ItemId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn fresh_ids_are_ordered_by_creation() {
        let first = CommentId::new();
        let second = CommentId::new();
        assert!(second > first);
    }

    proptest! {
        #[test]
        fn any_24_hex_digits_parse(s in "[0-9a-fA-F]{24}") {
            let id: CommentId = s.parse().unwrap();
            prop_assert_eq!(id.to_hex(), s.to_ascii_lowercase());
        }

        #[test]
        fn wrong_length_never_parses(s in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
            prop_assert!(s.parse::<CommentId>().is_err());
        }

        #[test]
        fn non_hex_never_parses(prefix in "[0-9a-f]{0,23}", bad in "[g-zG-Z_\\-]") {
            let mut s = prefix.clone();
            s.push_str(&bad);
            while s.len() < OBJECT_ID_HEX_LEN {
                s.push('0');
            }
            prop_assert!(!is_valid_object_id(&s));
            prop_assert!(s.parse::<ItemId>().is_err());
        }
    }
}
