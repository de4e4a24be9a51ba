use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A functional measurement type recognized in clinical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MetricKind {
    Abduction,
    Flexion,
    Extension,
    Rotation,
    /// "Balance articular" / "movilidad" without a specific movement.
    GlobalRom,
    /// Muscle strength on the 0–5 scale.
    Strength,
    /// Percentage of functional loss.
    FunctionalLoss,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Abduction => "abduction",
            MetricKind::Flexion => "flexion",
            MetricKind::Extension => "extension",
            MetricKind::Rotation => "rotation",
            MetricKind::GlobalRom => "global_rom",
            MetricKind::Strength => "strength",
            MetricKind::FunctionalLoss => "functional_loss",
        }
    }

    /// Joint angles, in degrees.
    pub fn is_angle(self) -> bool {
        matches!(
            self,
            MetricKind::Abduction
                | MetricKind::Flexion
                | MetricKind::Extension
                | MetricKind::Rotation
                | MetricKind::GlobalRom
        )
    }

    /// Largest in-domain value. Anything above is a misread and is dropped.
    pub fn upper_bound(self) -> f64 {
        match self {
            MetricKind::Strength => 5.0,
            MetricKind::FunctionalLoss => 100.0,
            _ => 180.0,
        }
    }

    /// Whether the worst reading is the highest one (loss percentages)
    /// rather than the lowest (angles, strength).
    pub fn worst_is_highest(self) -> bool {
        matches!(self, MetricKind::FunctionalLoss)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = CoreError;

    /// Accepts the canonical snake_case names and the Spanish report terms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "abduction" | "abduccion" | "abducción" => MetricKind::Abduction,
            "flexion" | "flexión" => MetricKind::Flexion,
            "extension" | "extensión" => MetricKind::Extension,
            "rotation" | "rotacion" | "rotación" => MetricKind::Rotation,
            "global_rom" | "rom_global" | "rom" | "movilidad" => MetricKind::GlobalRom,
            "strength" | "fuerza" | "balance_muscular" => MetricKind::Strength,
            "functional_loss" | "perdida_funcional" | "pérdida_funcional" => {
                MetricKind::FunctionalLoss
            }
            other => return Err(CoreError::UnknownMetricKind(other.to_string())),
        };
        Ok(kind)
    }
}

/// A single in-domain measurement.
///
/// Construction goes through [`Metric::new`], which refuses out-of-domain
/// values, so a stored `Metric` is always plausible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: f64,
}

impl Metric {
    pub fn new(kind: MetricKind, value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 || value > kind.upper_bound() {
            return None;
        }
        Some(Self { kind, value })
    }
}

/// The consolidated, document-wide metric map: one worst value per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricMap(pub BTreeMap<MetricKind, f64>);

impl MetricMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a reading into the map, keeping the worst value for its kind.
    pub fn record(&mut self, metric: Metric) {
        self.0
            .entry(metric.kind)
            .and_modify(|current| {
                let worse = if metric.kind.worst_is_highest() {
                    metric.value > *current
                } else {
                    metric.value < *current
                };
                if worse {
                    *current = metric.value;
                }
            })
            .or_insert(metric.value);
    }

    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        self.0.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<Metric> for MetricMap {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        let mut map = MetricMap::new();
        for metric in iter {
            map.record(metric);
        }
        map
    }
}
