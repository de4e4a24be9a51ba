use baremo_core::models::{Chapter, Diagnosis, MetricMap, SeverityClass};
use baremo_rubric::tables::CardiovascularCues;

use super::{Assessment, ChapterRule, text_views};
use crate::text::{CueSet, TextNormalizer};

#[derive(Debug, Clone)]
pub struct Cardiovascular {
    hypertension: CueSet,
    uncontrolled: CueSet,
    serious: CueSet,
    normalizer: TextNormalizer,
}

impl Cardiovascular {
    pub fn new(cues: &CardiovascularCues, normalizer: &TextNormalizer) -> Self {
        Self {
            hypertension: CueSet::new(&cues.hypertension, normalizer),
            uncontrolled: CueSet::new(&cues.uncontrolled, normalizer),
            serious: CueSet::new(&cues.serious, normalizer),
            normalizer: normalizer.clone(),
        }
    }
}

impl ChapterRule for Cardiovascular {
    fn id(&self) -> &'static str {
        "cardiovascular"
    }

    fn chapters(&self) -> &[Chapter] {
        &[Chapter::Cardiovascular]
    }

    fn assess(&self, diagnosis: &Diagnosis, _metrics: &MetricMap) -> Assessment {
        let views: Vec<(String, String)> = text_views(diagnosis, &self.normalizer).collect();
        let any = |cues: &CueSet| views.iter().any(|(l, n)| cues.matches(l, n));

        // Controlled hypertension alone is not a deficiency.
        if any(&self.hypertension) {
            let class = if any(&self.uncontrolled) {
                SeverityClass::Mild
            } else {
                SeverityClass::None
            };
            return Assessment::new(class, 0.7);
        }
        if any(&self.serious) {
            return Assessment::new(SeverityClass::Moderate, 0.6);
        }
        Assessment::new(SeverityClass::Mild, 0.6)
    }
}
