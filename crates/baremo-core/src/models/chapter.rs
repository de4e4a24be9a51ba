use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Body-system chapter of Annex III of RD 888/2022.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Chapter {
    /// Chapter 1, the generic fallback for recognizable disease wording.
    General,
    Neurological,
    Cardiovascular,
    Respiratory,
    Endocrine,
    Genitourinary,
    Musculoskeletal,
    Hematologic,
    Digestive,
    MentalHealth,
    /// No chapter could be resolved. Such diagnoses are never valued.
    Unknown,
}

impl Chapter {
    /// Statutory chapter number, `None` for [`Chapter::Unknown`].
    pub const fn number(self) -> Option<u8> {
        match self {
            Chapter::General => Some(1),
            Chapter::Neurological => Some(2),
            Chapter::Cardiovascular => Some(4),
            Chapter::Respiratory => Some(5),
            Chapter::Endocrine => Some(6),
            Chapter::Genitourinary => Some(7),
            Chapter::Musculoskeletal => Some(8),
            Chapter::Hematologic => Some(9),
            Chapter::Digestive => Some(10),
            Chapter::MentalHealth => Some(15),
            Chapter::Unknown => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Chapter::General => "general",
            Chapter::Neurological => "neurological",
            Chapter::Cardiovascular => "cardiovascular",
            Chapter::Respiratory => "respiratory",
            Chapter::Endocrine => "endocrine",
            Chapter::Genitourinary => "genitourinary",
            Chapter::Musculoskeletal => "musculoskeletal",
            Chapter::Hematologic => "hematologic",
            Chapter::Digestive => "digestive",
            Chapter::MentalHealth => "mental_health",
            Chapter::Unknown => "unknown",
        }
    }

    /// Spanish system name used in legal-basis text.
    pub const fn system_name(self) -> &'static str {
        match self {
            Chapter::General => "Disposiciones generales",
            Chapter::Neurological => "Sistema nervioso",
            Chapter::Cardiovascular => "Sistema cardiovascular",
            Chapter::Respiratory => "Sistema respiratorio",
            Chapter::Endocrine => "Sistema endocrino",
            Chapter::Genitourinary => "Sistema genitourinario",
            Chapter::Musculoskeletal => "Sistema musculoesquelético",
            Chapter::Hematologic => "Sistema hematopoyético",
            Chapter::Digestive => "Aparato digestivo",
            Chapter::MentalHealth => "Trastornos mentales",
            Chapter::Unknown => "Sin capítulo",
        }
    }

    pub fn is_known(self) -> bool {
        self != Chapter::Unknown
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "Cap. {n}"),
            None => f.write_str("Cap. ?"),
        }
    }
}

impl FromStr for Chapter {
    type Err = CoreError;

    /// Accepts the snake_case name or the statutory chapter number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let chapter = match s {
            "general" | "1" => Chapter::General,
            "neurological" | "2" => Chapter::Neurological,
            "cardiovascular" | "4" => Chapter::Cardiovascular,
            "respiratory" | "5" => Chapter::Respiratory,
            "endocrine" | "6" => Chapter::Endocrine,
            "genitourinary" | "7" => Chapter::Genitourinary,
            "musculoskeletal" | "8" => Chapter::Musculoskeletal,
            "hematologic" | "9" => Chapter::Hematologic,
            "digestive" | "10" => Chapter::Digestive,
            "mental_health" | "15" => Chapter::MentalHealth,
            "unknown" => Chapter::Unknown,
            other => return Err(CoreError::UnknownChapter(other.to_string())),
        };
        Ok(chapter)
    }
}
