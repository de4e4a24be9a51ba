//! baremo-core
//!
//! Pure domain types for disability valuation under the RD 888/2022 rubric.
//! No text processing and no rubric tables. These are the shapes handed
//! between the engine, the CLI and any serializing collaborator.

pub mod error;
pub mod models;

pub use error::CoreError;
