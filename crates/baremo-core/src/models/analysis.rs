use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diagnosis::Diagnosis;
use super::entity::RecognizedEntities;
use super::metric::MetricMap;
use super::severity::SeverityClass;
use super::valuation::{ChapterValuation, FinalValuation};

/// Input of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisRequest {
    /// Plain text already extracted from the source document.
    pub text: String,
    /// Opaque document-type label ("clinical", "judicial", "administrative").
    #[serde(default)]
    pub document_type: Option<String>,
    /// The whole text is itself a proven-facts excerpt.
    #[serde(default)]
    pub proven_facts: bool,
    /// Diagnosis text -> body-part label overrides.
    #[serde(default)]
    pub body_part_hints: BTreeMap<String, String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    pub fn with_body_part_hint(mut self, diagnosis: impl Into<String>, part: impl Into<String>) -> Self {
        self.body_part_hints.insert(diagnosis.into(), part.into());
        self
    }

    pub fn as_proven_facts(mut self) -> Self {
        self.proven_facts = true;
        self
    }
}

/// Summary of the final valuation in the shape reviewers compare across
/// documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestedClassification {
    pub class: SeverityClass,
    pub suggested_percentage: f64,
    pub description: String,
    pub legal_basis: String,
    pub confidence: f64,
}

impl From<&FinalValuation> for SuggestedClassification {
    fn from(final_valuation: &FinalValuation) -> Self {
        Self {
            class: final_valuation.class,
            suggested_percentage: final_valuation.percentage,
            description: final_valuation.description.clone(),
            legal_basis: final_valuation.legal_basis.clone(),
            confidence: final_valuation.confidence,
        }
    }
}

/// Output of one analysis run.
///
/// `final_valuation` is `None` when no diagnosis could be classified; callers
/// treat that as insufficient data, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Analysis {
    pub document_type: Option<String>,
    pub rubric_version: String,
    pub entities: RecognizedEntities,
    pub diagnoses: Vec<Diagnosis>,
    pub metrics: MetricMap,
    pub chapter_valuations: Vec<ChapterValuation>,
    pub final_valuation: Option<FinalValuation>,
    pub suggested_classification: Option<SuggestedClassification>,
}
