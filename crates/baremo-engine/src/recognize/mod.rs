//! Entity recognition over plain text.
//!
//! Diagnoses come from three passes (curated vocabulary, structural markers,
//! bullet lists) unioned by mention key. Metrics, codes and ratings come from
//! rubric patterns. Recognition never fails: text without matches yields
//! empty lists.

mod codes;
mod diagnosis;
mod measure;
mod proven_facts;
mod ratings;
mod validate;

use baremo_core::models::RecognizedEntities;
use baremo_rubric::tables::RecognizerVocabulary;
use tracing::debug;

use crate::error::EngineError;
use codes::CodeExtractor;
use diagnosis::{DiagnosisPasses, MentionSet};
use measure::MetricExtractor;
pub use proven_facts::Excerpt;
use proven_facts::ProvenFactsLocator;
use ratings::RatingExtractor;
pub use validate::{DiagnosisValidator, Rejection};

const JUDICIAL: &str = "judicial";

#[derive(Debug)]
pub struct Recognizer {
    diagnoses: DiagnosisPasses,
    metrics: MetricExtractor,
    codes: CodeExtractor,
    ratings: RatingExtractor,
    proven_facts: ProvenFactsLocator,
}

impl Recognizer {
    pub fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        Ok(Self {
            diagnoses: DiagnosisPasses::new(vocab)?,
            metrics: MetricExtractor::new(vocab)?,
            codes: CodeExtractor::new(vocab)?,
            ratings: RatingExtractor::new(vocab)?,
            proven_facts: ProvenFactsLocator::new(&vocab.proven_facts)?,
        })
    }

    /// Recognize every entity of `text`. `proven_fact` tags each diagnosis
    /// as coming from a proven-facts excerpt.
    pub fn recognize(&self, text: &str, proven_fact: bool) -> RecognizedEntities {
        let entities = RecognizedEntities {
            diagnoses: self.diagnoses.extract(text, proven_fact),
            metrics: self.metrics.extract(text),
            codes: self.codes.extract(text),
            ratings: self.ratings.extract(text),
        };
        debug!(
            diagnoses = entities.diagnoses.len(),
            metrics = entities.metrics.len(),
            codes = entities.codes.len(),
            ratings = entities.ratings.len(),
            proven_fact,
            "entities recognized"
        );
        entities
    }

    /// Recognize a whole document. For judicial documents the proven-facts
    /// section is read first so its diagnoses keep proven-fact provenance.
    pub fn recognize_document(
        &self,
        text: &str,
        document_type: Option<&str>,
        proven_facts: bool,
    ) -> RecognizedEntities {
        if proven_facts {
            return self.recognize(text, true);
        }
        let judicial = document_type.is_some_and(|t| t.trim().eq_ignore_ascii_case(JUDICIAL));
        let excerpt = if judicial {
            self.proven_facts_excerpt(text)
        } else {
            None
        };
        let Some(excerpt) = excerpt else {
            return self.recognize(text, false);
        };

        let mut merged = MentionSet::default();
        for mut mention in self.diagnoses.extract(excerpt.text, true) {
            mention.span = mention.span.shifted(excerpt.offset);
            merged.insert(mention);
        }
        let mut entities = self.recognize(text, false);
        for mention in entities.diagnoses.drain(..) {
            merged.insert(mention);
        }
        entities.diagnoses = merged.into_vec();
        debug!(
            offset = excerpt.offset,
            proven = entities.diagnoses.iter().filter(|d| d.proven_fact).count(),
            "proven-facts excerpt merged"
        );
        entities
    }

    pub fn proven_facts_excerpt<'t>(&self, text: &'t str) -> Option<Excerpt<'t>> {
        self.proven_facts.locate(text)
    }

    /// The filter applied to structural and list candidates.
    pub fn validator(&self) -> &DiagnosisValidator {
        &self.diagnoses.validator
    }
}
