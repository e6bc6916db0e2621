//! Hit dice value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Hit die type used for the max hit point calculation.
///
/// Persisted as "d6".."d12". Unrecognized values in stored records silently
/// deserialize to the default `d8` instead of failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitDice {
    D6,
    D10,
    D12,
    // serde requires the catch-all variant to be declared last
    #[default]
    #[serde(other)]
    D8,
}

impl HitDice {
    /// Face value of the die.
    pub fn die(&self) -> i32 {
        match self {
            Self::D6 => 6,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D8 => 8,
        }
    }

    /// Identifier used in the persisted record (e.g., "d8").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D6 => "d6",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D8 => "d8",
        }
    }
}

impl fmt::Display for HitDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HitDice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            _ => Err(DomainError::parse(format!("unknown hit dice type: {}", s))),
        }
    }
}
