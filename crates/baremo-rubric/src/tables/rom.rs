use baremo_core::models::{BodyPart, MetricKind, SeverityClass};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive range of whole degrees mapped to a class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RomTier {
    pub class: SeverityClass,
    pub min: u16,
    pub max: u16,
}

impl RomTier {
    pub fn contains(&self, degrees: u16) -> bool {
        self.min <= degrees && degrees <= self.max
    }
}

/// Range-of-motion severity table of one joint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RomTable {
    pub body_part: BodyPart,
    /// Movements whose worst (lowest) reading decides the tier.
    pub movements: Vec<MetricKind>,
    pub tiers: Vec<RomTier>,
}

impl RomTable {
    /// Tier containing `angle`, compared at whole-degree resolution.
    /// Angles above every tier yield `None`.
    pub fn tier_for(&self, angle: f64) -> Option<SeverityClass> {
        if !angle.is_finite() || angle < 0.0 {
            return None;
        }
        let degrees = angle.round().min(f64::from(u16::MAX)) as u16;
        self.tiers
            .iter()
            .find(|t| t.contains(degrees))
            .map(|t| t.class)
    }
}
