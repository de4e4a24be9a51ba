//! baremo-rubric
//!
//! The RD 888/2022 valuation rubric as versioned data. Pure data, no text
//! processing: class bands and their VIA, range-of-motion tiers, the chapter
//! priority list, hierarchical pathology groups, severity cues and the
//! recognizer vocabularies, all loaded from one JSON document.

pub mod error;
pub mod tables;
pub mod validate;

use std::path::Path;

use baremo_core::models::{BodyPart, Chapter, SeverityClass};
use serde::{Deserialize, Serialize};

pub use error::RubricError;
use tables::{
    ChapterFallbacks, ChapterVocabulary, ClassBand, CombinationRule, GroupDefinition,
    LegalBasisNotes, RecognizerVocabulary, RomTable, SeverityCues, TextRules,
};
pub use validate::RubricIssue;

/// The rubric shipped with the crate.
pub const EMBEDDED_JSON: &str = include_str!("../data/rd888_2022.json");

/// A complete, validated rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rubric {
    pub version: String,
    pub legal_reference: String,
    pub classes: Vec<ClassBand>,
    pub combination: CombinationRule,
    pub legal_basis: LegalBasisNotes,
    pub rom: Vec<RomTable>,
    /// Body-system chapters in detection priority order, most specific first.
    pub chapters: Vec<ChapterVocabulary>,
    pub fallbacks: ChapterFallbacks,
    pub text: TextRules,
    pub groups: Vec<GroupDefinition>,
    pub severity: SeverityCues,
    pub recognizer: RecognizerVocabulary,
}

impl Rubric {
    /// Parse and validate a rubric document.
    pub fn from_json(json: &str) -> Result<Self, RubricError> {
        let rubric: Rubric = serde_json::from_str(json)?;
        let issues = rubric.validate();
        if !issues.is_empty() {
            return Err(RubricError::Invalid(issues));
        }
        Ok(rubric)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RubricError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The rubric compiled into this crate.
    pub fn embedded() -> Result<Self, RubricError> {
        Self::from_json(EMBEDDED_JSON)
    }

    pub fn band(&self, class: SeverityClass) -> Option<&ClassBand> {
        self.classes.iter().find(|b| b.class == class)
    }

    /// VIA (fixed adjustment value) of a class.
    pub fn via(&self, class: SeverityClass) -> Option<u8> {
        self.band(class).map(|b| b.via)
    }

    /// The highest class whose lower bound does not exceed `percentage`.
    pub fn class_for_percentage(&self, percentage: f64) -> SeverityClass {
        self.classes
            .iter()
            .filter(|b| f64::from(b.min) <= percentage)
            .map(|b| b.class)
            .max()
            .unwrap_or(SeverityClass::None)
    }

    pub fn rom_table(&self, body_part: BodyPart) -> Option<&RomTable> {
        self.rom.iter().find(|t| t.body_part == body_part)
    }

    pub fn chapter_priority(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.chapters.iter().map(|c| c.chapter)
    }

    pub fn group(&self, name: &str) -> Option<&GroupDefinition> {
        self.groups.iter().find(|g| g.name == name)
    }
}
