//! Domain types exchanged with the bear service.

use crate::error::AlaskaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of bear. Closed set; unknown wire values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BearType {
    #[serde(rename = "POLAR")]
    Polar,
    #[serde(rename = "BROWN")]
    Brown,
    #[serde(rename = "BLACK")]
    Black,
    #[serde(rename = "GUMMY")]
    Gummy,
}

impl BearType {
    /// Every bear type, in wire order.
    pub const ALL: [BearType; 4] = [Self::Polar, Self::Brown, Self::Black, Self::Gummy];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polar => "POLAR",
            Self::Brown => "BROWN",
            Self::Black => "BLACK",
            Self::Gummy => "GUMMY",
        }
    }
}

impl fmt::Display for BearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BearType {
    type Err = AlaskaError;

    /// Accepts the wire value in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AlaskaError::InvalidBearType(s.to_string()))
    }
}

/// A bear as stored and returned by the service.
///
/// `bear_id` is always assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearRecord {
    pub bear_id: u64,
    pub bear_type: BearType,
    pub bear_name: String,
    pub bear_age: f64,
}

/// Request body for create and update: the three mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearPayload {
    pub bear_type: BearType,
    pub bear_name: String,
    pub bear_age: f64,
}

impl BearPayload {
    pub fn new(bear_type: BearType, bear_name: impl Into<String>, bear_age: f64) -> Self {
        Self {
            bear_type,
            bear_name: bear_name.into(),
            bear_age,
        }
    }
}
