//! Typed views over the sections of a rubric document.

pub mod chapters;
pub mod classes;
pub mod groups;
pub mod recognizer;
pub mod rom;
pub mod severity;
pub mod text;

pub use chapters::{ChapterFallbacks, ChapterVocabulary};
pub use classes::{ClassBand, CombinationRule, LegalBasisNotes};
pub use groups::GroupDefinition;
pub use recognizer::{MetricPattern, ProvenFactsMarkers, RatingPattern, RecognizerVocabulary};
pub use rom::{RomTable, RomTier};
pub use severity::{
    CardiovascularCues, MentalHealthCues, MusculoskeletalCues, OrganSystemCues, SeverityCues,
};
pub use text::{BodyPartTerm, SynonymCluster, TextRules};
