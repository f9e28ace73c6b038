//! Unique identifier types for fee calculations
//!
//! Reference numbers use UUID v7: the leading 48 bits are a millisecond
//! timestamp and the remainder is random, so every calculation gets a
//! distinct, chronologically sortable reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::FeeError;

/// Prefix printed in front of every stamp duty reference
pub const REFERENCE_PREFIX: &str = "SD-";

/// Reference number stamped on a calculation result
///
/// Rendered as `SD-` followed by 32 uppercase hex digits, e.g.
/// `SD-0190F3A2B4C87D5E9A1B2C3D4E5F6071`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceNumber(Uuid);

impl ReferenceNumber {
    /// Create a new reference with the current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReferenceNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:X}", REFERENCE_PREFIX, self.0.simple())
    }
}

impl FromStr for ReferenceNumber {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix(REFERENCE_PREFIX)
            .ok_or_else(|| FeeError::InvalidReference(s.to_string()))?;
        Uuid::try_parse(hex)
            .map(Self)
            .map_err(|_| FeeError::InvalidReference(s.to_string()))
    }
}

impl TryFrom<String> for ReferenceNumber {
    type Error = FeeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReferenceNumber> for String {
    fn from(reference: ReferenceNumber) -> Self {
        reference.to_string()
    }
}
