//! Body-system chapter detection.
//!
//! Chapters are tried in rubric priority order; within a chapter, regex
//! patterns before whole-word keywords. First match wins. Text that matches
//! no chapter falls back to musculoskeletal anatomy, then to generic disease
//! wording, and is otherwise `Unknown`.

use baremo_core::models::Chapter;
use baremo_rubric::Rubric;
use regex::Regex;

use crate::error::EngineError;
use crate::text::{case_insensitive, word_set};

#[derive(Debug)]
struct ChapterMatcher {
    chapter: Chapter,
    patterns: Vec<Regex>,
    keywords: Option<Regex>,
}

impl ChapterMatcher {
    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
            || self.keywords.as_ref().is_some_and(|re| re.is_match(text))
    }
}

#[derive(Debug)]
pub struct ChapterDetector {
    matchers: Vec<ChapterMatcher>,
    musculoskeletal: Option<Regex>,
    general: Option<Regex>,
}

impl ChapterDetector {
    pub fn new(rubric: &Rubric) -> Result<Self, EngineError> {
        let matchers = rubric
            .chapters
            .iter()
            .map(|vocab| {
                let table = format!("chapters.{}", vocab.chapter.as_str());
                let patterns = vocab
                    .patterns
                    .iter()
                    .map(|p| case_insensitive(p, &table))
                    .collect::<Result<_, _>>()?;
                Ok(ChapterMatcher {
                    chapter: vocab.chapter,
                    patterns,
                    keywords: word_set(&vocab.keywords, &table)?,
                })
            })
            .collect::<Result<_, EngineError>>()?;
        Ok(Self {
            matchers,
            musculoskeletal: word_set(&rubric.fallbacks.musculoskeletal, "fallbacks.musculoskeletal")?,
            general: word_set(&rubric.fallbacks.general, "fallbacks.general")?,
        })
    }

    pub fn detect(&self, text: &str) -> Chapter {
        let lower = text.to_lowercase();
        if let Some(m) = self.matchers.iter().find(|m| m.matches(&lower)) {
            return m.chapter;
        }
        if self.musculoskeletal.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return Chapter::Musculoskeletal;
        }
        if self.general.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return Chapter::General;
        }
        Chapter::Unknown
    }
}
