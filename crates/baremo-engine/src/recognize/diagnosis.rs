use std::collections::{HashMap, HashSet};
use std::ops::Range;

use baremo_core::models::{DiagnosisMention, EntitySource, Span};
use baremo_rubric::tables::RecognizerVocabulary;
use regex::Regex;
use tracing::trace;

use super::validate::DiagnosisValidator;
use crate::error::EngineError;
use crate::text::{case_insensitive, collapse_whitespace, mention_key, phrase};

/// Diagnosis mentions of one text, unique by mention key, in discovery order.
#[derive(Debug, Default)]
pub(crate) struct MentionSet {
    seen: HashSet<String>,
    mentions: Vec<DiagnosisMention>,
}

impl MentionSet {
    pub(crate) fn contains(&self, text: &str) -> bool {
        self.seen.contains(&mention_key(text))
    }

    /// Record a mention unless one with the same key exists. Returns whether
    /// it was recorded.
    pub(crate) fn insert(&mut self, mention: DiagnosisMention) -> bool {
        if !self.seen.insert(mention_key(&mention.text)) {
            return false;
        }
        self.mentions.push(mention);
        true
    }

    pub(crate) fn into_vec(self) -> Vec<DiagnosisMention> {
        self.mentions
    }
}

/// The three diagnosis passes: curated vocabulary, structural markers and
/// bullet lists.
#[derive(Debug)]
pub(crate) struct DiagnosisPasses {
    whitelist: Vec<Regex>,
    abbreviations: HashMap<String, String>,
    structural: Vec<Regex>,
    list_item: Regex,
    parenthetical: Regex,
    cutoff: Option<Regex>,
    filler_words: HashSet<String>,
    trailing_conjunction: Option<Regex>,
    compound_separator: Regex,
    pub(crate) validator: DiagnosisValidator,
}

impl DiagnosisPasses {
    pub(crate) fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        let whitelist = vocab
            .whitelist
            .iter()
            .map(|p| phrase(p, "recognizer.whitelist"))
            .collect::<Result<_, _>>()?;
        let structural = vocab
            .structural
            .iter()
            .map(|p| case_insensitive(p, "recognizer.structural"))
            .collect::<Result<_, _>>()?;
        let list_item =
            Regex::new(&vocab.list_item).map_err(EngineError::pattern("recognizer.list_item"))?;
        let parenthetical =
            Regex::new(r"\s*\([^)]*\)\s*").map_err(EngineError::pattern("parenthetical"))?;

        let cutoff = if vocab.cutoffs.is_empty() {
            None
        } else {
            Some(case_insensitive(&vocab.cutoffs.join("|"), "recognizer.cutoffs")?)
        };
        let trailing_conjunction = if vocab.trailing_conjunctions.is_empty() {
            None
        } else {
            let words = vocab
                .trailing_conjunctions
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Some(case_insensitive(
                &format!(r"\s+(?:{words})\s*$"),
                "recognizer.trailing_conjunctions",
            )?)
        };

        Ok(Self {
            whitelist,
            abbreviations: vocab
                .abbreviations
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
            structural,
            list_item,
            parenthetical,
            cutoff,
            filler_words: vocab.filler_words.iter().map(|w| w.to_lowercase()).collect(),
            trailing_conjunction,
            compound_separator: case_insensitive(
                &vocab.compound_separator,
                "recognizer.compound_separator",
            )?,
            validator: DiagnosisValidator::new(vocab)?,
        })
    }

    pub(crate) fn extract(&self, text: &str, proven_fact: bool) -> Vec<DiagnosisMention> {
        let mut found = MentionSet::default();
        self.whitelist_pass(text, proven_fact, &mut found);
        self.structural_pass(text, proven_fact, &mut found);
        self.list_pass(text, proven_fact, &mut found);
        found.into_vec()
    }

    fn whitelist_pass(&self, text: &str, proven_fact: bool, found: &mut MentionSet) {
        for re in &self.whitelist {
            for m in re.find_iter(text) {
                let matched = collapse_whitespace(m.as_str());
                let text = self
                    .abbreviations
                    .get(&matched.to_lowercase())
                    .cloned()
                    .unwrap_or(matched);
                found.insert(DiagnosisMention {
                    text,
                    span: Span::new(m.start(), m.end()),
                    source: EntitySource::Whitelist,
                    proven_fact,
                });
            }
        }
    }

    fn structural_pass(&self, text: &str, proven_fact: bool, found: &mut MentionSet) {
        for re in &self.structural {
            for caps in re.captures_iter(text) {
                let Some(capture) = caps.get(1) else {
                    continue;
                };
                let range = self.clean(capture.as_str());
                let candidate = collapse_whitespace(&capture.as_str()[range.clone()]);
                if let Err(reason) = self.validator.check(&candidate) {
                    trace!(candidate = %candidate, reason = %reason, "structural candidate rejected");
                    continue;
                }
                if found.contains(&candidate) {
                    continue;
                }

                let start = capture.start() + range.start;
                let end = capture.start() + range.end;
                let parts: Vec<&str> = self
                    .compound_separator
                    .split(&candidate)
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect();

                if parts.len() <= 1 {
                    found.insert(DiagnosisMention {
                        text: candidate,
                        span: Span::new(start, end),
                        source: EntitySource::Pattern,
                        proven_fact,
                    });
                    continue;
                }

                let mut cursor = start;
                for part in parts {
                    if let Err(reason) = self.validator.check(part) {
                        trace!(candidate = %part, reason = %reason, "compound part rejected");
                        continue;
                    }
                    let span = match text[cursor..end].find(part) {
                        Some(offset) => {
                            let part_start = cursor + offset;
                            cursor = part_start + part.len();
                            Span::new(part_start, cursor)
                        }
                        None => Span::new(start, end),
                    };
                    found.insert(DiagnosisMention {
                        text: part.to_string(),
                        span,
                        source: EntitySource::PatternSplit,
                        proven_fact,
                    });
                }
            }
        }
    }

    fn list_pass(&self, text: &str, proven_fact: bool, found: &mut MentionSet) {
        for caps in self.list_item.captures_iter(text) {
            let Some(capture) = caps.get(1) else {
                continue;
            };
            let without_notes = self.parenthetical.replace_all(capture.as_str(), " ");
            let candidate = collapse_whitespace(&without_notes);
            if let Err(reason) = self.validator.check(&candidate) {
                trace!(candidate = %candidate, reason = %reason, "list item rejected");
                continue;
            }
            found.insert(DiagnosisMention {
                text: candidate,
                span: Span::new(capture.start(), capture.end()),
                source: EntitySource::ListItem,
                proven_fact,
            });
        }
    }

    /// Byte range of `raw` that survives cleaning: cut at the first cutoff
    /// phrase, trailing punctuation, leading filler words and a trailing
    /// conjunction removed.
    pub(crate) fn clean(&self, raw: &str) -> Range<usize> {
        let mut start = raw.len() - raw.trim_start().len();
        let mut end = raw.trim_end().len().max(start);

        if let Some(cut) = self.cutoff.as_ref().and_then(|re| re.find(&raw[start..end])) {
            end = start + cut.start();
        }
        end = start + raw[start..end].trim_end_matches(['.', ',', ';', ':', ' ', '\t', '\n']).len();

        loop {
            let rest = &raw[start..end];
            let Some(word_end) = rest.find(char::is_whitespace) else {
                break;
            };
            let word = rest[..word_end].trim_end_matches(',').to_lowercase();
            if !self.filler_words.contains(&word) {
                break;
            }
            let after = &rest[word_end..];
            start += word_end + (after.len() - after.trim_start().len());
        }

        if let Some(conj) = self
            .trailing_conjunction
            .as_ref()
            .and_then(|re| re.find(&raw[start..end]))
        {
            end = start + conj.start();
        }
        end = start + raw[start..end].trim_end().len();
        start..end
    }
}
