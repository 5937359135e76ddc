use crate::LedgerError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// One of the two mutually exclusive bettable results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Boy,
    Girl,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boy => write!(f, "boy"),
            Self::Girl => write!(f, "girl"),
        }
    }
}

impl FromStr for Outcome {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boy" => Ok(Self::Boy),
            "girl" => Ok(Self::Girl),
            other => Err(LedgerError::InvalidOutcome(other.to_string())),
        }
    }
}
