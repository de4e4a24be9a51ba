use baremo_core::models::{BodyPart, Chapter, Diagnosis, MetricKind, MetricMap, SeverityClass};
use baremo_rubric::tables::{MusculoskeletalCues, RomTable};

use super::{Assessment, ChapterRule, text_views};
use crate::text::{CueSet, TextNormalizer};

/// Musculoskeletal chapter. A measured range of motion worse than the mild
/// tier decides the class. Weak strength floors it at moderate. Otherwise
/// keyword cues decide.
#[derive(Debug, Clone)]
pub struct Musculoskeletal {
    rom: Vec<RomTable>,
    severe_pathology: CueSet,
    functional_escalation: CueSet,
    aggravating: CueSet,
    weak_strength: f64,
    normalizer: TextNormalizer,
}

impl Musculoskeletal {
    pub fn new(cues: &MusculoskeletalCues, rom: &[RomTable], normalizer: &TextNormalizer) -> Self {
        Self {
            rom: rom.to_vec(),
            severe_pathology: CueSet::new(&cues.severe_pathology, normalizer),
            functional_escalation: CueSet::new(&cues.functional_escalation, normalizer),
            aggravating: CueSet::new(&cues.aggravating, normalizer),
            weak_strength: cues.weak_strength,
            normalizer: normalizer.clone(),
        }
    }

    /// Tier of the worst (lowest) reading among the movements the body
    /// part's table covers.
    pub fn rom_class(&self, body_part: BodyPart, metrics: &MetricMap) -> Option<SeverityClass> {
        let table = self.rom.iter().find(|t| t.body_part == body_part)?;
        let worst = table
            .movements
            .iter()
            .filter_map(|kind| metrics.get(*kind))
            .reduce(f64::min)?;
        table.tier_for(worst)
    }

    fn any_cue(&self, cues: &CueSet, diagnosis: &Diagnosis) -> bool {
        text_views(diagnosis, &self.normalizer).any(|(l, n)| cues.matches(&l, &n))
    }
}

impl ChapterRule for Musculoskeletal {
    fn id(&self) -> &'static str {
        "musculoskeletal"
    }

    fn chapters(&self) -> &[Chapter] {
        &[Chapter::Musculoskeletal]
    }

    fn assess(&self, diagnosis: &Diagnosis, metrics: &MetricMap) -> Assessment {
        // A mild tier is not a determination.
        let rom = self
            .rom_class(diagnosis.body_part, metrics)
            .filter(|class| *class > SeverityClass::Mild);
        let mut assessment = match rom {
            Some(class) => Assessment::new(class, 0.8),
            None => Assessment::new(SeverityClass::Mild, 0.5),
        };

        if metrics
            .get(MetricKind::Strength)
            .is_some_and(|s| s <= self.weak_strength)
        {
            assessment.class = assessment.class.max(SeverityClass::Moderate);
            assessment.confidence = assessment.confidence.max(0.7);
        }
        if assessment.class != SeverityClass::Mild {
            return assessment;
        }

        if self.any_cue(&self.severe_pathology, diagnosis) {
            let confidence = if diagnosis.is_grouped { 0.7 } else { 0.6 };
            Assessment::new(SeverityClass::Moderate, confidence)
        } else if diagnosis.is_functional_only {
            if self.any_cue(&self.functional_escalation, diagnosis) {
                Assessment::new(SeverityClass::Moderate, 0.4)
            } else {
                Assessment::new(SeverityClass::Mild, 0.5)
            }
        } else if self.any_cue(&self.aggravating, diagnosis) {
            Assessment::new(SeverityClass::Mild, 0.4)
        } else {
            assessment
        }
    }
}
