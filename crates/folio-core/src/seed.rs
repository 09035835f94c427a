//! The bootstrap document used to (re)populate a store out of band.

use serde::Deserialize;

use crate::{
  resource::{
    Certification, Education, Experience, Language, OrganizationExperience,
    PersonalInfo,
  },
  skills::SkillSet,
};

/// Every administered collection's full content. Loading a seed replaces
/// whatever those collections held; contact messages are untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSeed {
  pub personal_info:            PersonalInfo,
  #[serde(default)]
  pub experiences:              Vec<Experience>,
  #[serde(default)]
  pub skills:                   Vec<SkillSet>,
  pub education:                Education,
  #[serde(default)]
  pub certifications:           Vec<Certification>,
  #[serde(default)]
  pub languages:                Vec<Language>,
  #[serde(default)]
  pub organization_experiences: Vec<OrganizationExperience>,
}

impl PortfolioSeed {
  /// Total number of documents the seed will write.
  pub fn document_count(&self) -> usize {
    2 + self.experiences.len()
      + self.skills.len()
      + self.certifications.len()
      + self.languages.len()
      + self.organization_experiences.len()
  }
}
