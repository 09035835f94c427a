//! Resource schemas: the fixed-shape documents the portfolio serves.
//!
//! Each resource has a payload struct (the fields a client sees besides the
//! [`Record`](crate::Record) envelope) and an update model whose fields are
//! all optional. Update models only ever reach a payload through
//! [`Record::apply`](crate::Record::apply).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Update};

// ─── Personal info ───────────────────────────────────────────────────────────

/// The site owner's headline details. Singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
  pub name:          String,
  pub title:         String,
  pub subtitle:      String,
  pub profile_image: String,
  pub location:      String,
  pub email:         String,
  pub phone:         String,
  pub linkedin:      String,
  pub cv_url:        String,
  pub summary:       String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalInfoUpdate {
  pub name:          Option<String>,
  pub title:         Option<String>,
  pub subtitle:      Option<String>,
  pub profile_image: Option<String>,
  pub location:      Option<String>,
  pub email:         Option<String>,
  pub phone:         Option<String>,
  pub linkedin:      Option<String>,
  pub cv_url:        Option<String>,
  pub summary:       Option<String>,
}

impl Update<PersonalInfo> for PersonalInfoUpdate {
  fn apply_to(self, t: &mut PersonalInfo) {
    set(&mut t.name, self.name);
    set(&mut t.title, self.title);
    set(&mut t.subtitle, self.subtitle);
    set(&mut t.profile_image, self.profile_image);
    set(&mut t.location, self.location);
    set(&mut t.email, self.email);
    set(&mut t.phone, self.phone);
    set(&mut t.linkedin, self.linkedin);
    set(&mut t.cv_url, self.cv_url);
    set(&mut t.summary, self.summary);
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

/// A position held. Inactive experiences are hidden from the public list but
/// stay in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
  pub title:        String,
  pub company:      String,
  pub period:       String,
  pub location:     String,
  pub achievements: Vec<String>,
  /// Sort key only; neither unique nor contiguous.
  #[serde(default)]
  pub order:        i64,
  #[serde(default = "default_true")]
  pub is_active:    bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceUpdate {
  pub title:        Option<String>,
  pub company:      Option<String>,
  pub period:       Option<String>,
  pub location:     Option<String>,
  pub achievements: Option<Vec<String>>,
  pub order:        Option<i64>,
  pub is_active:    Option<bool>,
}

impl Update<Experience> for ExperienceUpdate {
  fn apply_to(self, t: &mut Experience) {
    set(&mut t.title, self.title);
    set(&mut t.company, self.company);
    set(&mut t.period, self.period);
    set(&mut t.location, self.location);
    set(&mut t.achievements, self.achievements);
    set(&mut t.order, self.order);
    set(&mut t.is_active, self.is_active);
  }
}

// ─── Organization experience ─────────────────────────────────────────────────

/// A volunteer or student-organisation role, kept apart from employment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationExperience {
  pub title:        String,
  pub organization: String,
  pub period:       String,
  pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationExperienceUpdate {
  pub title:        Option<String>,
  pub organization: Option<String>,
  pub period:       Option<String>,
  pub achievements: Option<Vec<String>>,
}

impl Update<OrganizationExperience> for OrganizationExperienceUpdate {
  fn apply_to(self, t: &mut OrganizationExperience) {
    set(&mut t.title, self.title);
    set(&mut t.organization, self.organization);
    set(&mut t.period, self.period);
    set(&mut t.achievements, self.achievements);
  }
}

// ─── Education ───────────────────────────────────────────────────────────────

/// Highest degree obtained. Singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
  pub degree:       String,
  pub university:   String,
  pub faculty:      String,
  pub major:        String,
  pub gpa:          String,
  pub period:       String,
  pub location:     String,
  pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationUpdate {
  pub degree:       Option<String>,
  pub university:   Option<String>,
  pub faculty:      Option<String>,
  pub major:        Option<String>,
  pub gpa:          Option<String>,
  pub period:       Option<String>,
  pub location:     Option<String>,
  pub achievements: Option<Vec<String>>,
}

impl Update<Education> for EducationUpdate {
  fn apply_to(self, t: &mut Education) {
    set(&mut t.degree, self.degree);
    set(&mut t.university, self.university);
    set(&mut t.faculty, self.faculty);
    set(&mut t.major, self.major);
    set(&mut t.gpa, self.gpa);
    set(&mut t.period, self.period);
    set(&mut t.location, self.location);
    set(&mut t.achievements, self.achievements);
  }
}

// ─── Certification ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
  pub title:  String,
  pub issuer: String,
  /// Free-form, e.g. "September 2025".
  pub date:   String,
  #[serde(rename = "type")]
  pub kind:   String,
  #[serde(default)]
  pub order:  i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificationUpdate {
  pub title:  Option<String>,
  pub issuer: Option<String>,
  pub date:   Option<String>,
  #[serde(rename = "type")]
  pub kind:   Option<String>,
  pub order:  Option<i64>,
}

impl Update<Certification> for CertificationUpdate {
  fn apply_to(self, t: &mut Certification) {
    set(&mut t.title, self.title);
    set(&mut t.issuer, self.issuer);
    set(&mut t.date, self.date);
    set(&mut t.kind, self.kind);
    set(&mut t.order, self.order);
  }
}

// ─── Language ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageLevel {
  Native,
  Proficient,
  Basic,
}

impl LanguageLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Native => "Native",
      Self::Proficient => "Proficient",
      Self::Basic => "Basic",
    }
  }
}

impl fmt::Display for LanguageLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LanguageLevel {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Native" => Ok(Self::Native),
      "Proficient" => Ok(Self::Proficient),
      "Basic" => Ok(Self::Basic),
      other => Err(Error::UnknownVariant {
        kind:  "language level",
        value: other.to_owned(),
      }),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
  pub language: String,
  pub level:    LanguageLevel,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageUpdate {
  pub language: Option<String>,
  pub level:    Option<LanguageLevel>,
}

impl Update<Language> for LanguageUpdate {
  fn apply_to(self, t: &mut Language) {
    set(&mut t.language, self.language);
    set(&mut t.level, self.level);
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn set<T>(slot: &mut T, value: Option<T>) {
  if let Some(v) = value {
    *slot = v;
  }
}

fn default_true() -> bool { true }
