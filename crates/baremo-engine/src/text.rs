//! Text normalization shared by every stage.
//!
//! `normalize` is the canonical comparison form of a diagnosis: lowercase,
//! punctuation removed, stop words dropped, whitespace collapsed. It is a
//! pure function of its input and idempotent.

use std::collections::{HashMap, HashSet};

use baremo_rubric::tables::TextRules;
use regex::Regex;

use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    /// variant -> canonical term
    synonyms: HashMap<String, String>,
}

impl TextNormalizer {
    pub fn new(rules: &TextRules) -> Self {
        let stop_words = rules.stop_words.iter().map(|w| w.to_lowercase()).collect();
        let mut synonyms = HashMap::new();
        for cluster in &rules.synonyms {
            let canonical = cluster.canonical.to_lowercase();
            for variant in &cluster.variants {
                synonyms.insert(variant.to_lowercase(), canonical.clone());
            }
            synonyms.insert(canonical.clone(), canonical);
        }
        Self {
            stop_words,
            synonyms,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();
        stripped
            .split_whitespace()
            .filter(|w| !self.stop_words.contains(*w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace every word of an already normalized text by its synonym
    /// cluster's canonical term.
    pub fn canonicalize(&self, normalized: &str) -> String {
        normalized
            .split_whitespace()
            .map(|w| self.synonyms.get(w).map(String::as_str).unwrap_or(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalized and synonym-canonicalized form of raw text.
    pub fn canonical(&self, text: &str) -> String {
        self.canonicalize(&self.normalize(text))
    }
}

/// Jaccard similarity of the word sets of two texts. Empty texts are
/// dissimilar to everything.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let a: HashSet<&str> = a.split_whitespace().collect();
    let b: HashSet<&str> = b.split_whitespace().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();
    intersection as f64 / union as f64
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key under which recognized mentions are considered identical.
pub fn mention_key(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

/// A set of severity cues.
///
/// A cue fires when it occurs in the lowercased raw text, or when its
/// normalized form occurs in the normalized text. "rotura del manguito"
/// thus fires on "Rotura  del manguito," and "crónico", which normalizes
/// to nothing, still fires on raw text.
#[derive(Debug, Clone, Default)]
pub struct CueSet {
    cues: Vec<(String, String)>,
}

impl CueSet {
    pub fn new(cues: &[String], normalizer: &TextNormalizer) -> Self {
        let cues = cues
            .iter()
            .map(|c| (c.to_lowercase(), normalizer.normalize(c)))
            .collect();
        Self { cues }
    }

    pub fn matches(&self, raw_lower: &str, normalized: &str) -> bool {
        self.cues.iter().any(|(raw, norm)| {
            raw_lower.contains(raw.as_str()) || (!norm.is_empty() && normalized.contains(norm.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

/// Compile a case-insensitive whole-word alternation of literal terms.
/// `None` when there are no terms.
pub(crate) fn word_set(terms: &[String], table: &str) -> Result<Option<Regex>, EngineError> {
    if terms.is_empty() {
        return Ok(None);
    }
    let alternation = terms
        .iter()
        .map(|t| whole_word(&t.to_lowercase()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{alternation})"))
        .map(Some)
        .map_err(EngineError::pattern(table))
}

/// A word boundary only makes sense next to a word character: "dr." must
/// match before a space, where `\b` after the dot would not.
fn whole_word(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.starts_with(is_word) { r"\b" } else { "" };
    let tail = if term.ends_with(is_word) { r"\b" } else { "" };
    format!("{lead}{}{tail}", regex::escape(term))
}

/// Compile a rubric phrase pattern: literal spaces match any whitespace run,
/// the phrase must stand on word boundaries, case is ignored.
pub(crate) fn phrase(fragment: &str, table: &str) -> Result<Regex, EngineError> {
    let body = fragment.split(' ').collect::<Vec<_>>().join(r"\s+");
    Regex::new(&format!(r"(?i)\b(?:{body})\b")).map_err(EngineError::pattern(table))
}

pub(crate) fn case_insensitive(pattern: &str, table: &str) -> Result<Regex, EngineError> {
    Regex::new(&format!("(?i){pattern}")).map_err(EngineError::pattern(table))
}

