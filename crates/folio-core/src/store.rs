//! The `PortfolioStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! Higher layers (`folio-api`, `folio-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  Record,
  contact::{ContactMessage, ContactMessageUpdate},
  resource::{
    Certification, Education, Experience, Language, OrganizationExperience,
    PersonalInfo,
  },
  seed::PortfolioSeed,
  skills::SkillSet,
};

/// Abstraction over a portfolio document store.
///
/// Content collections are read-only from the API's point of view; they are
/// replaced wholesale by [`seed`](Self::seed). Contact messages are
/// append-only through [`insert_contact_message`](Self::insert_contact_message).
///
/// "Storage order" below is whatever order the backend yields when no sort
/// is requested. Backends should keep it stable across reads of unchanged
/// data.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PortfolioStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Singletons ────────────────────────────────────────────────────────

  /// Any one personal-info record, or `None` if the collection is empty.
  fn personal_info(
    &self,
  ) -> impl Future<Output = Result<Option<Record<PersonalInfo>>, Self::Error>> + Send + '_;

  /// Any one education record, or `None` if the collection is empty.
  fn education(
    &self,
  ) -> impl Future<Output = Result<Option<Record<Education>>, Self::Error>> + Send + '_;

  // ── Collections ───────────────────────────────────────────────────────

  /// Experiences with `is_active = true`, ascending by `order`. Ties keep
  /// storage order.
  fn active_experiences(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<Experience>>, Self::Error>> + Send + '_;

  /// All skill sets in storage order.
  fn skill_sets(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<SkillSet>>, Self::Error>> + Send + '_;

  /// All certifications ascending by `order`. Ties keep storage order.
  fn certifications(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<Certification>>, Self::Error>> + Send + '_;

  /// All languages in storage order.
  fn languages(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<Language>>, Self::Error>> + Send + '_;

  /// All organisation experiences in storage order.
  fn organization_experiences(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<OrganizationExperience>>, Self::Error>>
  + Send
  + '_;

  // ── Contact messages ──────────────────────────────────────────────────

  /// Persist a fully-built message record as-is.
  fn insert_contact_message(
    &self,
    record: Record<ContactMessage>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Read one message back by id. Returns `None` if not found.
  fn get_contact_message(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Record<ContactMessage>>, Self::Error>> + Send + '_;

  /// Every stored message, oldest first.
  fn list_contact_messages(
    &self,
  ) -> impl Future<Output = Result<Vec<Record<ContactMessage>>, Self::Error>> + Send + '_;

  /// Apply `update` through [`Record::apply`] and persist the result.
  /// Returns `None` if no message has this id.
  fn update_contact_message(
    &self,
    id: Uuid,
    update: ContactMessageUpdate,
  ) -> impl Future<Output = Result<Option<Record<ContactMessage>>, Self::Error>> + Send + '_;

  // ── Administration ────────────────────────────────────────────────────

  /// Replace all content collections with `seed`, assigning fresh ids and
  /// timestamps. Contact messages are left alone.
  fn seed(
    &self,
    seed: PortfolioSeed,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
