use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown body part label: {0}")]
    UnknownBodyPart(String),

    #[error("unknown metric kind: {0}")]
    UnknownMetricKind(String),

    #[error("class number out of range: {0}")]
    InvalidClassNumber(u8),

    #[error("unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("unknown chapter: {0}")]
    UnknownChapter(String),
}
