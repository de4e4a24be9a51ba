use std::collections::HashMap;

use baremo_core::models::{Metric, MetricKind, MetricReading, Span};
use baremo_rubric::tables::RecognizerVocabulary;
use regex::Regex;
use tracing::trace;

use crate::error::EngineError;
use crate::text::{case_insensitive, collapse_whitespace, mention_key};

/// Joint angles, muscle strength and functional-loss percentages.
#[derive(Debug)]
pub(crate) struct MetricExtractor {
    patterns: Vec<(Regex, Option<MetricKind>)>,
    movements: HashMap<String, MetricKind>,
}

impl MetricExtractor {
    pub(crate) fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        let patterns = vocab
            .metrics
            .iter()
            .map(|p| Ok((case_insensitive(&p.pattern, "recognizer.metrics")?, p.kind)))
            .collect::<Result<_, EngineError>>()?;
        let movements = vocab
            .movements
            .iter()
            .map(|(term, kind)| (mention_key(term), *kind))
            .collect();
        Ok(Self {
            patterns,
            movements,
        })
    }

    pub(crate) fn extract(&self, text: &str) -> Vec<MetricReading> {
        let mut readings: Vec<MetricReading> = Vec::new();
        for (re, fixed_kind) in &self.patterns {
            for caps in re.captures_iter(text) {
                let (Some(whole), Some(raw_value)) = (caps.get(0), caps.name("value")) else {
                    continue;
                };
                let kind = match fixed_kind {
                    Some(kind) => Some(*kind),
                    None => caps
                        .name("movement")
                        .and_then(|m| self.movements.get(&mention_key(m.as_str())).copied()),
                };
                let Some(kind) = kind else {
                    trace!(text = whole.as_str(), "metric without a known movement");
                    continue;
                };
                let Some(value) = parse_number(raw_value.as_str()) else {
                    continue;
                };
                let Some(metric) = Metric::new(kind, value) else {
                    trace!(%kind, value, "out-of-domain metric discarded");
                    continue;
                };

                let span = Span::new(whole.start(), whole.end());
                let duplicate = readings
                    .iter()
                    .any(|r| r.metric == metric && r.span.overlaps(&span));
                if !duplicate {
                    readings.push(MetricReading {
                        text: collapse_whitespace(whole.as_str()),
                        span,
                        metric,
                    });
                }
            }
        }
        readings.sort_by_key(|r| r.span.start);
        readings
    }
}

/// Parse a decimal written with either separator ("90", "4,5", "4.5").
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}
