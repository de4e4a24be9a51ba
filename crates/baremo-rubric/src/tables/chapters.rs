use baremo_core::models::Chapter;
use serde::{Deserialize, Serialize};

/// Detection vocabulary of one body-system chapter.
///
/// `patterns` are regex fragments tried first; `keywords` are literal terms
/// matched as whole words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterVocabulary {
    pub chapter: Chapter,
    pub patterns: Vec<String>,
    pub keywords: Vec<String>,
}

/// Terms consulted only when no chapter in the priority list matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterFallbacks {
    /// Anatomical or pathological terms that default to chapter 8.
    pub musculoskeletal: Vec<String>,
    /// Disease-indicating words that default to chapter 1.
    pub general: Vec<String>,
}
