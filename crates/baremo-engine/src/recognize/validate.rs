use std::collections::HashSet;
use std::fmt;

use baremo_rubric::tables::RecognizerVocabulary;
use regex::Regex;

use crate::error::EngineError;
use crate::text::{case_insensitive, word_set};

const MIN_CHARS: usize = 5;
const MAX_CHARS: usize = 150;

/// Why a structural or list candidate was not accepted as a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    InvalidLead,
    Blacklisted,
    VagueWord,
    NoMedicalTerm,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::Length => "length",
            Rejection::InvalidLead => "invalid_lead",
            Rejection::Blacklisted => "blacklisted",
            Rejection::VagueWord => "vague_word",
            Rejection::NoMedicalTerm => "no_medical_term",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic filter for free-text diagnosis candidates. Whitelist matches
/// never go through it.
#[derive(Debug)]
pub struct DiagnosisValidator {
    invalid_leads: Vec<Regex>,
    blacklist: Option<Regex>,
    strong_terms: Option<Regex>,
    symptom_body: Regex,
    vague_words: HashSet<String>,
}

impl DiagnosisValidator {
    pub fn new(vocab: &RecognizerVocabulary) -> Result<Self, EngineError> {
        let invalid_leads = vocab
            .invalid_leads
            .iter()
            .map(|p| case_insensitive(p, "recognizer.invalid_leads"))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            invalid_leads,
            blacklist: word_set(&vocab.blacklist, "recognizer.blacklist")?,
            strong_terms: word_set(&vocab.strong_terms, "recognizer.strong_terms")?,
            symptom_body: case_insensitive(&vocab.symptom_body, "recognizer.symptom_body")?,
            vague_words: vocab.vague_words.iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    pub fn check(&self, candidate: &str) -> Result<(), Rejection> {
        let trimmed = candidate.trim();
        let chars = trimmed.chars().count();
        if !(MIN_CHARS..=MAX_CHARS).contains(&chars) {
            return Err(Rejection::Length);
        }

        let lower = trimmed.to_lowercase();
        if self.invalid_leads.iter().any(|re| re.is_match(&lower)) {
            return Err(Rejection::InvalidLead);
        }
        if self.blacklist.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return Err(Rejection::Blacklisted);
        }

        let mut words = lower.split_whitespace();
        if let (Some(only), None) = (words.next(), words.next())
            && self.vague_words.contains(only)
        {
            return Err(Rejection::VagueWord);
        }

        let strong = self.strong_terms.as_ref().is_some_and(|re| re.is_match(&lower));
        if !strong && !self.symptom_body.is_match(&lower) {
            return Err(Rejection::NoMedicalTerm);
        }
        Ok(())
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }
}
