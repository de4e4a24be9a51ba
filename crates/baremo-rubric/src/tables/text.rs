use baremo_core::models::BodyPart;
use serde::{Deserialize, Serialize};

/// Normalization and similarity parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRules {
    /// Jaccard similarity at or above which two diagnoses are duplicates.
    pub similarity_threshold: f64,
    pub stop_words: Vec<String>,
    pub synonyms: Vec<SynonymCluster>,
    /// Anatomical terms in scan order.
    pub body_parts: Vec<BodyPartTerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymCluster {
    pub canonical: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPartTerm {
    pub term: String,
    pub part: BodyPart,
}
