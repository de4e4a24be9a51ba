use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::body_part::BodyPart;
use super::chapter::Chapter;
use super::entity::{EntitySource, Span};

/// A deduplicated (and possibly grouped) diagnosis, ready for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    /// Representative text. For a group this is the anchor lesion.
    pub text: String,
    /// Lowercased, punctuation-free, stop-word-free form of `text`.
    pub normalized_text: String,
    pub body_part: BodyPart,
    pub chapter: Chapter,
    /// Texts valued together with this one, anchor first. Empty until grouping.
    pub related_diagnoses: Vec<String>,
    pub is_grouped: bool,
    /// A functional consequence whose anatomical cause was never found.
    pub is_functional_only: bool,
    pub group_name: Option<String>,
    pub span: Option<Span>,
    pub source: Option<EntitySource>,
    pub proven_fact: bool,
}

impl Diagnosis {
    /// A standalone diagnosis as produced by deduplication.
    pub fn new(
        text: impl Into<String>,
        normalized_text: impl Into<String>,
        body_part: BodyPart,
        chapter: Chapter,
    ) -> Self {
        Self {
            text: text.into(),
            normalized_text: normalized_text.into(),
            body_part,
            chapter,
            related_diagnoses: Vec::new(),
            is_grouped: false,
            is_functional_only: false,
            group_name: None,
            span: None,
            source: None,
            proven_fact: false,
        }
    }

    /// Every text this unit stands for: the representative text followed by
    /// the absorbed ones.
    pub fn all_texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.text.as_str()).chain(
            self.related_diagnoses
                .iter()
                .map(String::as_str)
                .filter(move |t| *t != self.text),
        )
    }
}
