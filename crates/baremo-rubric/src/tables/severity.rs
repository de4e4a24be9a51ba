use serde::{Deserialize, Serialize};

/// Keyword cues consulted by the per-chapter classification rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityCues {
    pub musculoskeletal: MusculoskeletalCues,
    pub mental_health: MentalHealthCues,
    pub cardiovascular: CardiovascularCues,
    /// Shared by the respiratory, endocrine, genitourinary, hematologic and
    /// digestive chapters.
    pub organ_system: OrganSystemCues,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusculoskeletalCues {
    pub severe_pathology: Vec<String>,
    /// Adjectives that lift a functional-only diagnosis to class 2.
    pub functional_escalation: Vec<String>,
    pub aggravating: Vec<String>,
    /// Strength at or below this (0-5 scale) floors the class at 2.
    pub weak_strength: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthCues {
    pub severe: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardiovascularCues {
    pub hypertension: Vec<String>,
    pub uncontrolled: Vec<String>,
    pub serious: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganSystemCues {
    pub severe: Vec<String>,
}
