use std::collections::BTreeMap;

use baremo_core::models::{MetricKind, RatingKind};
use serde::{Deserialize, Serialize};

/// Vocabularies and pattern fragments of the entity recognizer.
///
/// Whitelist entries are phrase patterns: literal spaces stand for any run
/// of whitespace, and each entry is matched as a whole phrase, ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerVocabulary {
    pub whitelist: Vec<String>,
    /// Lowercase abbreviation -> full diagnosis name.
    pub abbreviations: BTreeMap<String, String>,
    /// Marker and narrative patterns. Group 1 captures the diagnosis.
    pub structural: Vec<String>,
    /// Bullet line pattern. Group 1 captures the diagnosis.
    pub list_item: String,
    /// Phrases after which a captured diagnosis is cut.
    pub cutoffs: Vec<String>,
    pub filler_words: Vec<String>,
    pub trailing_conjunctions: Vec<String>,
    pub compound_separator: String,
    /// Shapes a candidate may not start with (matched on lowercase text).
    pub invalid_leads: Vec<String>,
    /// Administrative phrases a candidate may not contain as whole words.
    pub blacklist: Vec<String>,
    pub strong_terms: Vec<String>,
    /// "Symptom + body part" shape accepted in place of a strong term.
    pub symptom_body: String,
    /// Words rejected when they make up the whole candidate.
    pub vague_words: Vec<String>,
    pub metrics: Vec<MetricPattern>,
    /// Lowercase movement term -> metric kind.
    pub movements: BTreeMap<String, MetricKind>,
    /// Code patterns. The `code` group captures the code.
    pub codes: Vec<String>,
    pub ratings: Vec<RatingPattern>,
    pub proven_facts: ProvenFactsMarkers,
}

/// A metric pattern. The `value` group captures the number; without a fixed
/// `kind`, the `movement` group is looked up in the movement table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPattern {
    pub pattern: String,
    #[serde(default)]
    pub kind: Option<MetricKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingPattern {
    pub pattern: String,
    pub kind: RatingKind,
}

/// Headings delimiting the proven-facts section of a judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvenFactsMarkers {
    pub start: String,
    pub end: String,
}
