use baremo_rubric::tables::ProvenFactsMarkers;
use regex::Regex;

use crate::error::EngineError;
use crate::text::case_insensitive;

/// The proven-facts section of a judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'t> {
    /// Byte offset of the excerpt in the full text.
    pub offset: usize,
    pub text: &'t str,
}

#[derive(Debug)]
pub(crate) struct ProvenFactsLocator {
    start: Regex,
    end: Regex,
}

impl ProvenFactsLocator {
    pub(crate) fn new(markers: &ProvenFactsMarkers) -> Result<Self, EngineError> {
        Ok(Self {
            start: case_insensitive(&markers.start, "recognizer.proven_facts.start")?,
            end: case_insensitive(&markers.end, "recognizer.proven_facts.end")?,
        })
    }

    /// From the "HECHOS PROBADOS" heading up to the next legal-grounds or
    /// ruling heading, or to the end of the text.
    pub(crate) fn locate<'t>(&self, text: &'t str) -> Option<Excerpt<'t>> {
        let heading = self.start.find(text)?;
        let end = self
            .end
            .find_at(text, heading.end())
            .map_or(text.len(), |m| m.start());
        Some(Excerpt {
            offset: heading.start(),
            text: &text[heading.start()..end],
        })
    }
}
