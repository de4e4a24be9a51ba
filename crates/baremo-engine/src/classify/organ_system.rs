use baremo_core::models::{Chapter, Diagnosis, MetricMap, SeverityClass};
use baremo_rubric::tables::OrganSystemCues;

use super::{Assessment, ChapterRule, text_views};
use crate::text::{CueSet, TextNormalizer};

/// Respiratory, endocrine, genitourinary, hematologic and digestive
/// chapters, which share one set of chronicity and insufficiency cues.
#[derive(Debug, Clone)]
pub struct OrganSystem {
    severe: CueSet,
    normalizer: TextNormalizer,
}

impl OrganSystem {
    pub fn new(cues: &OrganSystemCues, normalizer: &TextNormalizer) -> Self {
        Self {
            severe: CueSet::new(&cues.severe, normalizer),
            normalizer: normalizer.clone(),
        }
    }
}

impl ChapterRule for OrganSystem {
    fn id(&self) -> &'static str {
        "organ_system"
    }

    fn chapters(&self) -> &[Chapter] {
        &[
            Chapter::Respiratory,
            Chapter::Endocrine,
            Chapter::Genitourinary,
            Chapter::Hematologic,
            Chapter::Digestive,
        ]
    }

    fn assess(&self, diagnosis: &Diagnosis, _metrics: &MetricMap) -> Assessment {
        let severe = text_views(diagnosis, &self.normalizer)
            .any(|(lower, normalized)| self.severe.matches(&lower, &normalized));
        if severe {
            Assessment::new(SeverityClass::Moderate, 0.5)
        } else {
            Assessment::new(SeverityClass::Mild, 0.6)
        }
    }
}
