use baremo_core::models::SeverityClass;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One severity class with its statutory percentage range and VIA.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassBand {
    pub class: SeverityClass,
    pub min: u8,
    pub max: u8,
    /// Fixed adjustment value assigned to every diagnosis of this class.
    pub via: u8,
    pub description: String,
}

impl ClassBand {
    pub fn contains(&self, percentage: f64) -> bool {
        f64::from(self.min) <= percentage && percentage <= f64::from(self.max)
    }
}

/// Parameters of the combination formula (Art. 4.2).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CombinationRule {
    /// Statutory ceiling. The formula never assigns more.
    pub ceiling: f64,
    /// Confidence is penalised once more than this many components combine.
    pub penalty_after: usize,
    pub confidence_penalty: f64,
    /// How many leading components the formula trace lists.
    pub trace_components: usize,
    pub legal_basis: String,
}

/// Fixed text fragments of per-chapter legal-basis strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalBasisNotes {
    pub annex: String,
    pub grouped_note: String,
    pub functional_only_note: String,
}
