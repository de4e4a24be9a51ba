use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::Metric;
use crate::error::CoreError;

/// Byte offsets `[start, end)` into the analysed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityKind {
    Diagnosis,
    Metric,
    Code,
    Rating,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Diagnosis => "diagnosis",
            EntityKind::Metric => "metric",
            EntityKind::Code => "code",
            EntityKind::Rating => "rating",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    /// Accepts singular and plural forms ("metric", "metrics").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "diagnosis" | "diagnoses" => EntityKind::Diagnosis,
            "metric" | "metrics" => EntityKind::Metric,
            "code" | "codes" => EntityKind::Code,
            "rating" | "ratings" => EntityKind::Rating,
            other => return Err(CoreError::UnknownEntityKind(other.to_string())),
        };
        Ok(kind)
    }
}

/// Which recognition pass produced a diagnosis mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntitySource {
    /// Curated vocabulary. Never discarded by validation.
    Whitelist,
    /// Text following a diagnostic marker or narrative phrasing.
    Pattern,
    /// One validated part of a compound structural match.
    PatternSplit,
    /// A bullet or hyphen list line.
    ListItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisMention {
    pub text: String,
    pub span: Span,
    pub source: EntitySource,
    /// Found inside a judicial "proven facts" excerpt.
    pub proven_fact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricReading {
    pub text: String,
    pub span: Span,
    pub metric: Metric,
}

/// An ICD-10 style code ("M75.1").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeMention {
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RatingKind {
    /// A previously recognized disability percentage.
    DisabilityDegree,
    /// A dependency grade (I–III, as a number).
    DependencyGrade,
    /// Reduced-mobility points.
    MobilityScore,
    /// A bare rubric score.
    ScaleScore,
}

/// A previously granted rating quoted by the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingMention {
    pub text: String,
    pub span: Span,
    pub value: f64,
    pub kind: RatingKind,
}

/// One recognized entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RawEntity {
    Diagnosis(DiagnosisMention),
    Metric(MetricReading),
    Code(CodeMention),
    Rating(RatingMention),
}

impl RawEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            RawEntity::Diagnosis(_) => EntityKind::Diagnosis,
            RawEntity::Metric(_) => EntityKind::Metric,
            RawEntity::Code(_) => EntityKind::Code,
            RawEntity::Rating(_) => EntityKind::Rating,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            RawEntity::Diagnosis(d) => d.span,
            RawEntity::Metric(m) => m.span,
            RawEntity::Code(c) => c.span,
            RawEntity::Rating(r) => r.span,
        }
    }
}

/// Recognizer output, one list per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecognizedEntities {
    pub diagnoses: Vec<DiagnosisMention>,
    pub metrics: Vec<MetricReading>,
    pub codes: Vec<CodeMention>,
    pub ratings: Vec<RatingMention>,
}

impl RecognizedEntities {
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
            && self.metrics.is_empty()
            && self.codes.is_empty()
            && self.ratings.is_empty()
    }

    /// Flatten into tagged entities ordered by position in the text.
    pub fn to_raw(&self) -> Vec<RawEntity> {
        let mut all: Vec<RawEntity> = self
            .diagnoses
            .iter()
            .cloned()
            .map(RawEntity::Diagnosis)
            .chain(self.metrics.iter().cloned().map(RawEntity::Metric))
            .chain(self.codes.iter().cloned().map(RawEntity::Code))
            .chain(self.ratings.iter().cloned().map(RawEntity::Rating))
            .collect();
        all.sort_by_key(|e| e.span().start);
        all
    }
}
