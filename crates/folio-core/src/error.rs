//! Error types for `folio-core`.

use serde::Serialize;
use thiserror::Error;

/// A single failed check on an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: String,
}

impl FieldError {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation failed: {}", describe(.0))]
  Validation(Vec<FieldError>),

  #[error("unknown {kind} value: {value:?}")]
  UnknownVariant { kind: &'static str, value: String },
}

fn describe(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(|e| format!("{}: {}", e.field, e.message))
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
