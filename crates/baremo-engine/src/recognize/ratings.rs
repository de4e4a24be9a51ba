use baremo_core::models::{RatingKind, RatingMention, Span};
use baremo_rubric::tables::RecognizerVocabulary;
use regex::Regex;

use super::measure::parse_number;
use crate::error::EngineError;
use crate::text::{case_insensitive, collapse_whitespace};

/// Previously granted ratings quoted by the document.
#[derive(Debug)]
pub(crate) struct RatingExtractor {
    patterns: Vec<(Regex, RatingKind)>,
}

impl RatingExtractor {
    pub(crate) fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        let patterns = vocab
            .ratings
            .iter()
            .map(|p| Ok((case_insensitive(&p.pattern, "recognizer.ratings")?, p.kind)))
            .collect::<Result<_, EngineError>>()?;
        Ok(Self { patterns })
    }

    pub(crate) fn extract(&self, text: &str) -> Vec<RatingMention> {
        let mut ratings: Vec<RatingMention> = Vec::new();
        for (re, kind) in &self.patterns {
            for caps in re.captures_iter(text) {
                let (Some(whole), Some(raw_value)) = (caps.get(0), caps.name("value")) else {
                    continue;
                };
                let Some(value) = parse_rating_value(raw_value.as_str()) else {
                    continue;
                };
                let span = Span::new(whole.start(), whole.end());
                if ratings.iter().any(|r| r.span.overlaps(&span)) {
                    continue;
                }
                ratings.push(RatingMention {
                    text: collapse_whitespace(whole.as_str()),
                    span,
                    value,
                    kind: *kind,
                });
            }
        }
        ratings.sort_by_key(|r| r.span.start);
        ratings
    }
}

/// Numbers, plus the roman numerals dependency grades are written in.
fn parse_rating_value(raw: &str) -> Option<f64> {
    match raw.trim().to_uppercase().as_str() {
        "I" => Some(1.0),
        "II" => Some(2.0),
        "III" => Some(3.0),
        other => parse_number(other),
    }
}
