use std::collections::HashSet;

use baremo_core::models::{Chapter, SeverityClass};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::Rubric;

/// One consistency problem found in a rubric document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{table}: {message}")]
pub struct RubricIssue {
    pub table: String,
    pub message: String,
}

impl RubricIssue {
    fn new(table: &str, message: impl Into<String>) -> Self {
        Self {
            table: table.to_string(),
            message: message.into(),
        }
    }
}

impl Rubric {
    /// Check the internal consistency of every table. An empty list means
    /// the rubric is usable.
    pub fn validate(&self) -> Vec<RubricIssue> {
        let mut issues = Vec::new();
        self.check_classes(&mut issues);
        self.check_combination(&mut issues);
        self.check_rom(&mut issues);
        self.check_chapters(&mut issues);
        self.check_text(&mut issues);
        self.check_groups(&mut issues);
        issues
    }

    fn check_classes(&self, issues: &mut Vec<RubricIssue>) {
        if self.classes.len() != SeverityClass::ALL.len() {
            issues.push(RubricIssue::new(
                "classes",
                format!(
                    "expected {} class bands, found {}",
                    SeverityClass::ALL.len(),
                    self.classes.len()
                ),
            ));
        }

        let mut expected_min = 0u16;
        for (band, class) in self.classes.iter().zip(SeverityClass::ALL) {
            if band.class != class {
                issues.push(RubricIssue::new(
                    "classes",
                    format!("band for {} listed where {} was expected", band.class, class),
                ));
            }
            if u16::from(band.min) != expected_min {
                issues.push(RubricIssue::new(
                    "classes",
                    format!(
                        "{} starts at {} but the previous band ends at {}",
                        band.class,
                        band.min,
                        expected_min.saturating_sub(1)
                    ),
                ));
            }
            if band.min > band.max {
                issues.push(RubricIssue::new(
                    "classes",
                    format!("{} has min {} above max {}", band.class, band.min, band.max),
                ));
            }
            if band.via < band.min || band.via > band.max {
                issues.push(RubricIssue::new(
                    "classes",
                    format!(
                        "{} VIA {} lies outside [{}, {}]",
                        band.class, band.via, band.min, band.max
                    ),
                ));
            }
            expected_min = u16::from(band.max) + 1;
        }
        if let Some(last) = self.classes.last()
            && last.max != 100
        {
            issues.push(RubricIssue::new(
                "classes",
                format!("last band ends at {} instead of 100", last.max),
            ));
        }
    }

    fn check_combination(&self, issues: &mut Vec<RubricIssue>) {
        let rule = &self.combination;
        if !(rule.ceiling > 0.0 && rule.ceiling <= 100.0) {
            issues.push(RubricIssue::new(
                "combination",
                format!("ceiling {} outside (0, 100]", rule.ceiling),
            ));
        }
        if !(rule.confidence_penalty > 0.0 && rule.confidence_penalty <= 1.0) {
            issues.push(RubricIssue::new(
                "combination",
                format!("confidence penalty {} outside (0, 1]", rule.confidence_penalty),
            ));
        }
    }

    fn check_rom(&self, issues: &mut Vec<RubricIssue>) {
        let mut seen = HashSet::new();
        for table in &self.rom {
            let label = format!("rom.{}", table.body_part);
            if !seen.insert(table.body_part) {
                issues.push(RubricIssue::new(&label, "duplicate table"));
            }
            if table.movements.is_empty() {
                issues.push(RubricIssue::new(&label, "no movements listed"));
            }
            if let Some(kind) = table.movements.iter().find(|m| !m.is_angle()) {
                issues.push(RubricIssue::new(
                    &label,
                    format!("{kind} is not a joint angle"),
                ));
            }
            for tier in &table.tiers {
                if tier.min > tier.max {
                    issues.push(RubricIssue::new(
                        &label,
                        format!("{} tier has min {} above max {}", tier.class, tier.min, tier.max),
                    ));
                }
            }
            for (i, a) in table.tiers.iter().enumerate() {
                for b in &table.tiers[i + 1..] {
                    if a.min <= b.max && b.min <= a.max {
                        issues.push(RubricIssue::new(
                            &label,
                            format!("{} and {} tiers overlap", a.class, b.class),
                        ));
                    }
                }
            }
        }
    }

    fn check_chapters(&self, issues: &mut Vec<RubricIssue>) {
        let mut seen = HashSet::new();
        for vocab in &self.chapters {
            if vocab.chapter == Chapter::Unknown {
                issues.push(RubricIssue::new(
                    "chapters",
                    "the unknown chapter cannot appear in the priority list",
                ));
            }
            if !seen.insert(vocab.chapter) {
                issues.push(RubricIssue::new(
                    "chapters",
                    format!("{} listed twice", vocab.chapter.as_str()),
                ));
            }
            if vocab.patterns.is_empty() && vocab.keywords.is_empty() {
                issues.push(RubricIssue::new(
                    "chapters",
                    format!("{} has neither patterns nor keywords", vocab.chapter.as_str()),
                ));
            }
        }
    }

    fn check_text(&self, issues: &mut Vec<RubricIssue>) {
        let threshold = self.text.similarity_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            issues.push(RubricIssue::new(
                "text",
                format!("similarity threshold {threshold} outside (0, 1]"),
            ));
        }
        let mut variants = HashSet::new();
        for cluster in &self.text.synonyms {
            for word in std::iter::once(&cluster.canonical).chain(&cluster.variants) {
                if !variants.insert(word.to_lowercase()) {
                    issues.push(RubricIssue::new(
                        "text.synonyms",
                        format!("'{word}' belongs to more than one cluster"),
                    ));
                }
            }
        }
    }

    fn check_groups(&self, issues: &mut Vec<RubricIssue>) {
        for group in &self.groups {
            if group.primary.is_empty() {
                issues.push(RubricIssue::new(
                    "groups",
                    format!("'{}' has no primary keywords", group.name),
                ));
            }
            if !group.chapter.is_known() {
                issues.push(RubricIssue::new(
                    "groups",
                    format!("'{}' targets the unknown chapter", group.name),
                ));
            }
        }
    }
}
