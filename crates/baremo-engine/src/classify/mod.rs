//! Per-chapter severity classification.
//!
//! Each chapter is served by one [`ChapterRule`]. A rule only decides the
//! severity class and a confidence; the percentage is always the VIA of that
//! class, looked up in the rubric.

mod baseline;
mod cardiovascular;
mod mental_health;
mod musculoskeletal;
mod organ_system;

use std::fmt;

use baremo_core::models::{Chapter, ChapterValuation, Diagnosis, MetricMap, SeverityClass};
use baremo_rubric::Rubric;
use baremo_rubric::tables::{ClassBand, LegalBasisNotes};
use tracing::debug;

pub use baseline::Baseline;
pub use cardiovascular::Cardiovascular;
pub use mental_health::MentalHealth;
pub use musculoskeletal::Musculoskeletal;
pub use organ_system::OrganSystem;

use crate::text::TextNormalizer;

/// Outcome of one rule before the rubric turns it into a valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub class: SeverityClass,
    pub confidence: f64,
}

impl Assessment {
    pub fn new(class: SeverityClass, confidence: f64) -> Self {
        Self { class, confidence }
    }
}

pub trait ChapterRule: Send + Sync {
    fn id(&self) -> &'static str;

    /// Chapters this rule classifies.
    fn chapters(&self) -> &[Chapter];

    fn assess(&self, diagnosis: &Diagnosis, metrics: &MetricMap) -> Assessment;
}

/// Every rule built from the rubric's cues. Each known chapter is served by
/// exactly one of them.
pub fn all_rules(rubric: &Rubric, normalizer: &TextNormalizer) -> Vec<Box<dyn ChapterRule>> {
    let cues = &rubric.severity;
    vec![
        Box::new(Musculoskeletal::new(&cues.musculoskeletal, &rubric.rom, normalizer)),
        Box::new(MentalHealth::new(&cues.mental_health, normalizer)),
        Box::new(Cardiovascular::new(&cues.cardiovascular, normalizer)),
        Box::new(OrganSystem::new(&cues.organ_system, normalizer)),
        Box::new(Baseline),
    ]
}

/// Lowercased raw text and normalized text of every text a diagnosis stands
/// for, the two views cue sets match against.
pub(crate) fn text_views<'d>(
    diagnosis: &'d Diagnosis,
    normalizer: &'d TextNormalizer,
) -> impl Iterator<Item = (String, String)> + 'd {
    diagnosis
        .all_texts()
        .map(move |t| (t.to_lowercase(), normalizer.normalize(t)))
}

pub struct Classifier {
    rules: Vec<Box<dyn ChapterRule>>,
    classes: Vec<ClassBand>,
    notes: LegalBasisNotes,
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

impl Classifier {
    pub fn new(rubric: &Rubric, normalizer: &TextNormalizer) -> Self {
        Self {
            rules: all_rules(rubric, normalizer),
            classes: rubric.classes.clone(),
            notes: rubric.legal_basis.clone(),
        }
    }

    pub fn rule_for(&self, chapter: Chapter) -> Option<&dyn ChapterRule> {
        self.rules
            .iter()
            .find(|r| r.chapters().contains(&chapter))
            .map(|r| r.as_ref())
    }

    /// Value one diagnosis. `None` when its chapter is unknown.
    pub fn classify(&self, diagnosis: &Diagnosis, metrics: &MetricMap) -> Option<ChapterValuation> {
        let number = diagnosis.chapter.number()?;
        let Some(rule) = self.rule_for(diagnosis.chapter) else {
            debug!(chapter = %diagnosis.chapter, "no rule serves chapter");
            return None;
        };
        let assessment = rule.assess(diagnosis, metrics);
        let band = self.classes.iter().find(|b| b.class == assessment.class)?;

        let mut legal_basis = format!(
            "{}, Cap. {number}, {} (VIA)",
            self.notes.annex, band.description
        );
        if diagnosis.is_grouped {
            legal_basis.push_str(". ");
            legal_basis.push_str(&self.notes.grouped_note);
        } else if diagnosis.is_functional_only {
            legal_basis.push_str(". ");
            legal_basis.push_str(&self.notes.functional_only_note);
        }

        debug!(
            rule = rule.id(),
            diagnosis = %diagnosis.text,
            class = assessment.class.number(),
            confidence = assessment.confidence,
            "diagnosis classified"
        );
        Some(ChapterValuation {
            diagnosis: diagnosis.text.clone(),
            normalized_text: diagnosis.normalized_text.clone(),
            chapter: diagnosis.chapter,
            body_part: diagnosis.body_part,
            class: assessment.class,
            percentage: band.via,
            description: band.description.clone(),
            confidence: assessment.confidence,
            legal_basis,
            is_grouped: diagnosis.is_grouped,
            is_functional_only: diagnosis.is_functional_only,
            group_name: diagnosis.group_name.clone(),
            related_diagnoses: diagnosis.related_diagnoses.clone(),
        })
    }
}
