use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Severity class (0–4) of a deficiency. Ordered from no deficiency to very
/// severe, so `max` picks the worse class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityClass {
    None,
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl SeverityClass {
    pub const ALL: [SeverityClass; 5] = [
        SeverityClass::None,
        SeverityClass::Mild,
        SeverityClass::Moderate,
        SeverityClass::Severe,
        SeverityClass::VerySevere,
    ];

    pub const fn number(self) -> u8 {
        match self {
            SeverityClass::None => 0,
            SeverityClass::Mild => 1,
            SeverityClass::Moderate => 2,
            SeverityClass::Severe => 3,
            SeverityClass::VerySevere => 4,
        }
    }

    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            0 => Ok(SeverityClass::None),
            1 => Ok(SeverityClass::Mild),
            2 => Ok(SeverityClass::Moderate),
            3 => Ok(SeverityClass::Severe),
            4 => Ok(SeverityClass::VerySevere),
            other => Err(CoreError::InvalidClassNumber(other)),
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clase {}", self.number())
    }
}
