use baremo_core::models::{Chapter, Diagnosis, MetricMap, SeverityClass};

use super::{Assessment, ChapterRule};

/// Chapters without cues of their own: a mild deficiency at low confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Baseline;

impl ChapterRule for Baseline {
    fn id(&self) -> &'static str {
        "baseline"
    }

    fn chapters(&self) -> &[Chapter] {
        &[Chapter::Neurological, Chapter::General]
    }

    fn assess(&self, _diagnosis: &Diagnosis, _metrics: &MetricMap) -> Assessment {
        Assessment::new(SeverityClass::Mild, 0.5)
    }
}
