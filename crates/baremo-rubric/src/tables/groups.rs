use baremo_core::models::{BodyPart, Chapter};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A hierarchical pathology group: one anatomical lesion and the functional
/// consequences valued together with it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupDefinition {
    pub name: String,
    pub chapter: Chapter,
    pub body_part: BodyPart,
    /// Keywords naming the lesion. Any of them anchors a group.
    pub primary: Vec<String>,
    /// Keywords naming symptoms or functional loss of that lesion.
    pub secondary: Vec<String>,
}
