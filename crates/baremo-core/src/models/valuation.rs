use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::body_part::BodyPart;
use super::chapter::Chapter;
use super::severity::SeverityClass;

/// The valuation of one classified diagnosis.
///
/// `percentage` is the VIA of `class`, looked up in the rubric, never
/// computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChapterValuation {
    pub diagnosis: String,
    pub normalized_text: String,
    pub chapter: Chapter,
    pub body_part: BodyPart,
    pub class: SeverityClass,
    pub percentage: u8,
    pub description: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub legal_basis: String,
    pub is_grouped: bool,
    pub is_functional_only: bool,
    pub group_name: Option<String>,
    pub related_diagnoses: Vec<String>,
}

/// The combined whole-person deficiency (BDGP) of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalValuation {
    /// In `[0, 99]`, rounded to two decimals.
    pub percentage: f64,
    pub class: SeverityClass,
    pub description: String,
    pub components_count: usize,
    pub formula_trace: String,
    pub confidence: f64,
    pub legal_basis: String,
}
