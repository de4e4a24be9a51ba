use baremo_rubric::RubricError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no text to analyse")]
    EmptyText,

    #[error("invalid rubric pattern in {table}: {source}")]
    Pattern {
        table: String,
        source: regex::Error,
    },

    #[error("rubric error: {0}")]
    Rubric(#[from] RubricError),
}

impl EngineError {
    pub(crate) fn pattern(table: &str) -> impl FnOnce(regex::Error) -> Self + '_ {
        move |source| EngineError::Pattern {
            table: table.to_string(),
            source,
        }
    }
}
