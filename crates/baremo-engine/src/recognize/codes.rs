use baremo_core::models::{CodeMention, Span};
use baremo_rubric::tables::RecognizerVocabulary;
use regex::Regex;

use crate::error::EngineError;
use crate::text::case_insensitive;

/// ICD-10 style codes introduced by a code marker.
#[derive(Debug)]
pub(crate) struct CodeExtractor {
    patterns: Vec<Regex>,
}

impl CodeExtractor {
    pub(crate) fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        let patterns = vocab
            .codes
            .iter()
            .map(|p| case_insensitive(p, "recognizer.codes"))
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub(crate) fn extract(&self, text: &str) -> Vec<CodeMention> {
        let mut codes: Vec<CodeMention> = Vec::new();
        for re in &self.patterns {
            for caps in re.captures_iter(text) {
                let Some(code) = caps.name("code") else {
                    continue;
                };
                let span = Span::new(code.start(), code.end());
                if codes.iter().any(|c| c.span.overlaps(&span)) {
                    continue;
                }
                codes.push(CodeMention {
                    text: code.as_str().to_uppercase(),
                    span,
                });
            }
        }
        codes.sort_by_key(|c| c.span.start);
        codes
    }
}
