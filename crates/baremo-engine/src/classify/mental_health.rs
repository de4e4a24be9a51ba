use baremo_core::models::{Chapter, Diagnosis, MetricMap, SeverityClass};
use baremo_rubric::tables::MentalHealthCues;

use super::{Assessment, ChapterRule, text_views};
use crate::text::{CueSet, TextNormalizer};

#[derive(Debug, Clone)]
pub struct MentalHealth {
    severe: CueSet,
    normalizer: TextNormalizer,
}

impl MentalHealth {
    pub fn new(cues: &MentalHealthCues, normalizer: &TextNormalizer) -> Self {
        Self {
            severe: CueSet::new(&cues.severe, normalizer),
            normalizer: normalizer.clone(),
        }
    }
}

impl ChapterRule for MentalHealth {
    fn id(&self) -> &'static str {
        "mental_health"
    }

    fn chapters(&self) -> &[Chapter] {
        &[Chapter::MentalHealth]
    }

    fn assess(&self, diagnosis: &Diagnosis, _metrics: &MetricMap) -> Assessment {
        let severe = text_views(diagnosis, &self.normalizer)
            .any(|(lower, normalized)| self.severe.matches(&lower, &normalized));
        if severe {
            Assessment::new(SeverityClass::Moderate, 0.6)
        } else {
            Assessment::new(SeverityClass::Mild, 0.5)
        }
    }
}
