use baremo_core::models::BodyPart;
use baremo_rubric::tables::BodyPartTerm;
use regex::Regex;

use crate::error::EngineError;

/// Derives the anatomical region of a diagnosis from its wording.
#[derive(Debug)]
pub struct BodyPartScanner {
    terms: Vec<(Regex, BodyPart)>,
}

impl BodyPartScanner {
    pub fn new(terms: &[BodyPartTerm]) -> Result<Self, EngineError> {
        let terms = terms
            .iter()
            .map(|t| {
                let re = Regex::new(&format!(r"(?i)\b{}s?\b", regex::escape(&t.term)))
                    .map_err(EngineError::pattern("text.body_parts"))?;
                Ok((re, t.part))
            })
            .collect::<Result<_, EngineError>>()?;
        Ok(Self { terms })
    }

    /// First term in table order that occurs as a whole word (plural
    /// allowed). `General` when none does.
    pub fn scan(&self, text: &str) -> BodyPart {
        self.terms
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map_or(BodyPart::General, |(_, part)| *part)
    }
}
