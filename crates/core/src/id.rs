//! Record identifiers.

use crate::error::Error;
use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of the external hex form of a record identifier.
pub const RECORD_ID_HEX_LEN: usize = 24;

/// Store-assigned identifier for a record.
///
/// Internally a 12-byte object id. Externally (paths, JSON) it is written as
/// 24 lower-case hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse from the external hex form.
    ///
    /// Upper-case hex digits are accepted; the canonical form produced by
    /// [`RecordId::to_hex`] is always lower-case.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if s.len() != RECORD_ID_HEX_LEN {
            return Err(Error::InvalidId(format!(
                "expected {RECORD_ID_HEX_LEN} hex chars, got {}",
                s.len()
            )));
        }
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|e| Error::InvalidId(e.to_string()))
    }

    /// Encode as lower-case hex.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Get the underlying object id.
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<RecordId> for ObjectId {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<RecordId> for bson::Bson {
    fn from(id: RecordId) -> Self {
        bson::Bson::ObjectId(id.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.to_hex())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
