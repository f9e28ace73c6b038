//! Transaction and property classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FeeError;

/// Kind of land transaction being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Outright transfer of title
    Transfer,
    /// Mortgage charged on the parcel
    Mortgage,
    /// Leasehold grant for a fixed term
    Lease,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Mortgage => "MORTGAGE",
            TransactionType::Lease => "LEASE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRANSFER" => Ok(TransactionType::Transfer),
            "MORTGAGE" => Ok(TransactionType::Mortgage),
            "LEASE" => Ok(TransactionType::Lease),
            _ => Err(FeeError::UnknownTransactionType(s.to_string())),
        }
    }
}

/// Land use classification of the parcel
///
/// Only consulted for transfers. Any classification the schedule does not
/// know about parses to `Unrecognized` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Agricultural,
    Industrial,
    #[serde(other)]
    Unrecognized,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::Agricultural => "AGRICULTURAL",
            PropertyType::Industrial => "INDUSTRIAL",
            PropertyType::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "RESIDENTIAL" => PropertyType::Residential,
            "COMMERCIAL" => PropertyType::Commercial,
            "AGRICULTURAL" => PropertyType::Agricultural,
            "INDUSTRIAL" => PropertyType::Industrial,
            _ => PropertyType::Unrecognized,
        })
    }
}
