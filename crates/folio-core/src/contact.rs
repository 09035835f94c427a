//! Contact-form submissions.
//!
//! A [`ContactSubmission`] is untrusted visitor input. It only becomes a
//! [`ContactMessage`] after [`ContactSubmission::validate`] accepts it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, FieldError, Result, Update};

/// `local@domain.tld`: no whitespace, a single `@`, at least one dot in the
/// domain and no empty labels around it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex is valid")
});

// ─── Stored message ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub name:    String,
  pub email:   String,
  pub company: Option<String>,
  pub subject: String,
  pub message: String,
  #[serde(default)]
  pub is_read: bool,
}

/// Admin-side mutation of a stored message. Not reachable over HTTP.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessageUpdate {
  pub is_read: Option<bool>,
}

impl Update<ContactMessage> for ContactMessageUpdate {
  fn apply_to(self, t: &mut ContactMessage) {
    if let Some(is_read) = self.is_read {
      t.is_read = is_read;
    }
  }
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// The body of `POST /contact`.
///
/// Missing strings decode as empty so that they are reported by
/// [`validate`](Self::validate) together with every other failing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub subject: String,
  #[serde(default)]
  pub message: String,
}

impl ContactSubmission {
  /// Check every field and, if all pass, produce an unread message with
  /// trimmed values. A blank `company` becomes `None`.
  pub fn validate(self) -> Result<ContactMessage> {
    let mut errors = Vec::new();

    let name = required(&mut errors, "name", self.name);
    let subject = required(&mut errors, "subject", self.subject);
    let message = required(&mut errors, "message", self.message);

    let email = self.email.trim().to_owned();
    if email.is_empty() {
      errors.push(FieldError::new("email", "must not be empty"));
    } else if !is_valid_email(&email) {
      errors.push(FieldError::new("email", "is not a valid email address"));
    }

    if !errors.is_empty() {
      return Err(Error::Validation(errors));
    }

    let company = self
      .company
      .map(|c| c.trim().to_owned())
      .filter(|c| !c.is_empty());

    Ok(ContactMessage { name, email, company, subject, message, is_read: false })
  }
}

fn required(
  errors: &mut Vec<FieldError>,
  field: &'static str,
  value: String,
) -> String {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    errors.push(FieldError::new(field, "must not be empty"));
  }
  trimmed.to_owned()
}

pub fn is_valid_email(address: &str) -> bool { EMAIL_RE.is_match(address) }
