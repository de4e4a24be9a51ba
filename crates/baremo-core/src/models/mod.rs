pub mod analysis;
pub mod body_part;
pub mod chapter;
pub mod diagnosis;
pub mod entity;
pub mod metric;
pub mod severity;
pub mod valuation;

pub use analysis::{Analysis, AnalysisRequest, SuggestedClassification};
pub use body_part::BodyPart;
pub use chapter::Chapter;
pub use diagnosis::Diagnosis;
pub use entity::{
    CodeMention, DiagnosisMention, EntityKind, EntitySource, MetricReading, RatingKind,
    RatingMention, RawEntity, RecognizedEntities, Span,
};
pub use metric::{Metric, MetricKind, MetricMap};
pub use severity::SeverityClass;
pub use valuation::{ChapterValuation, FinalValuation};
