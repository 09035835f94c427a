//! The record envelope shared by every persisted document.
//!
//! A record pairs a resource payload with its server-assigned identity and
//! timestamps. Identity and `created_at` never change once assigned;
//! `updated_at` moves on every mutation applied through [`Record::apply`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A partial update to a resource of type `T`.
///
/// Implementors overwrite only the fields they carry. Updates are applied
/// through [`Record::apply`], which owns the timestamp bookkeeping.
pub trait Update<T> {
  fn apply_to(self, target: &mut T);
}

/// A stored document: the resource fields plus identity and timestamps.
///
/// Serialises flat, with the identifier under `_id` as a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
  #[serde(rename = "_id", alias = "id")]
  pub id:         Uuid,
  #[serde(flatten)]
  pub data:       T,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl<T> Record<T> {
  /// Wrap `data` with a fresh identifier. Both timestamps come from the same
  /// clock read, so `created_at == updated_at` on a new record.
  pub fn new(data: T) -> Self { Self::new_at(data, Utc::now()) }

  pub fn new_at(data: T, now: DateTime<Utc>) -> Self {
    Self { id: Uuid::new_v4(), data, created_at: now, updated_at: now }
  }

  /// Apply `update` and refresh `updated_at`, even if no field changed.
  pub fn apply<U: Update<T>>(&mut self, update: U) {
    self.apply_at(update, Utc::now());
  }

  pub fn apply_at<U: Update<T>>(&mut self, update: U, now: DateTime<Utc>) {
    update.apply_to(&mut self.data);
    self.updated_at = now;
  }

  /// Transform the payload, keeping identity and timestamps.
  pub fn map<V>(self, f: impl FnOnce(T) -> V) -> Record<V> {
    Record {
      id:         self.id,
      data:       f(self.data),
      created_at: self.created_at,
      updated_at: self.updated_at,
    }
  }
}
