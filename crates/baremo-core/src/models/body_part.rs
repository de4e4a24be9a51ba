use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Anatomical region a diagnosis refers to. Compound regions are collapsed
/// (wrist and hand, ankle and foot, every spinal segment).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodyPart {
    Shoulder,
    Elbow,
    WristHand,
    Hip,
    Knee,
    AnkleFoot,
    Spine,
    #[default]
    General,
}

impl BodyPart {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyPart::Shoulder => "shoulder",
            BodyPart::Elbow => "elbow",
            BodyPart::WristHand => "wrist_hand",
            BodyPart::Hip => "hip",
            BodyPart::Knee => "knee",
            BodyPart::AnkleFoot => "ankle_foot",
            BodyPart::Spine => "spine",
            BodyPart::General => "general",
        }
    }

    /// Parse an English or Spanish label, including the anatomical terms
    /// that collapse into a compound region ("mano", "tarso", "lumbar").
    pub fn from_label(label: &str) -> Option<Self> {
        let part = match label.trim().to_lowercase().as_str() {
            "shoulder" | "hombro" => BodyPart::Shoulder,
            "elbow" | "codo" => BodyPart::Elbow,
            "wrist_hand" | "wrist" | "hand" | "muñeca" | "mano" | "muñeca/mano" => {
                BodyPart::WristHand
            }
            "hip" | "cadera" => BodyPart::Hip,
            "knee" | "rodilla" => BodyPart::Knee,
            "ankle_foot" | "ankle" | "foot" | "tobillo" | "pie" | "tarso" | "tobillo/pie" => {
                BodyPart::AnkleFoot
            }
            "spine" | "columna" | "lumbar" | "cervical" | "dorsal" => BodyPart::Spine,
            "general" => BodyPart::General,
            _ => return None,
        };
        Some(part)
    }

    /// A diagnosis with no specific region is compatible with any region.
    pub fn is_compatible_with(self, other: BodyPart) -> bool {
        self == BodyPart::General || other == BodyPart::General || self == other
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::from_label(s).ok_or_else(|| CoreError::UnknownBodyPart(s.to_string()))
    }
}
