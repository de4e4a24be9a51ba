//! baremo-engine
//!
//! The diagnosis-to-valuation pipeline for RD 888/2022:
//!
//! 1. [`recognize`]: diagnoses, metrics, codes and ratings from plain text.
//! 2. [`Engine::deduplicate`]: collapse mentions of the same condition.
//! 3. [`grouping`]: merge a lesion with its functional consequences.
//! 4. [`classify`]: chapter and severity class of each unit.
//! 5. [`combine`]: the combined whole-person percentage.
//!
//! An [`Engine`] is compiled once from a [`Rubric`] and is immutable
//! afterwards, so one engine serves any number of concurrent analyses.

pub mod body_part;
pub mod chapter;
pub mod classify;
pub mod combine;
pub mod dedup;
pub mod error;
pub mod grouping;
mod pipeline;
pub mod recognize;
pub mod text;

use std::sync::LazyLock;

use baremo_core::models::{BodyPart, Chapter};
use baremo_rubric::{Rubric, RubricError};

pub use error::EngineError;

use body_part::BodyPartScanner;
use chapter::ChapterDetector;
use classify::Classifier;
use grouping::Grouper;
use recognize::Recognizer;
use text::TextNormalizer;

#[derive(Debug)]
pub struct Engine {
    rubric: Rubric,
    normalizer: TextNormalizer,
    recognizer: Recognizer,
    body_parts: BodyPartScanner,
    chapters: ChapterDetector,
    grouper: Grouper,
    classifier: Classifier,
}

impl Engine {
    /// Validate `rubric` and compile every pattern it carries.
    pub fn new(rubric: Rubric) -> Result<Self, EngineError> {
        let issues = rubric.validate();
        if !issues.is_empty() {
            return Err(RubricError::Invalid(issues).into());
        }
        let normalizer = TextNormalizer::new(&rubric.text);
        Ok(Self {
            recognizer: Recognizer::new(&rubric.recognizer)?,
            body_parts: BodyPartScanner::new(&rubric.text.body_parts)?,
            chapters: ChapterDetector::new(&rubric)?,
            grouper: Grouper::new(&rubric.groups, &normalizer),
            classifier: Classifier::new(&rubric, &normalizer),
            normalizer,
            rubric,
        })
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    pub fn grouper(&self) -> &Grouper {
        &self.grouper
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn detect_chapter(&self, text: &str) -> Chapter {
        self.chapters.detect(text)
    }

    pub fn body_part_of(&self, text: &str) -> BodyPart {
        self.body_parts.scan(text)
    }
}

static STANDARD: LazyLock<Result<Engine, EngineError>> =
    LazyLock::new(|| Engine::new(Rubric::embedded()?));

/// The process-wide engine built from the embedded rubric on first use.
pub fn standard() -> Result<&'static Engine, &'static EngineError> {
    STANDARD.as_ref()
}
