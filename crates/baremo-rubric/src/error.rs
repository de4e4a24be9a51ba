use thiserror::Error;

use crate::validate::RubricIssue;

#[derive(Debug, Error)]
pub enum RubricError {
    #[error("rubric parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read rubric {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("rubric failed validation: {}", summarize(.0))]
    Invalid(Vec<RubricIssue>),
}

fn summarize(issues: &[RubricIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
