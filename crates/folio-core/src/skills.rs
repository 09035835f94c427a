//! Skill sets and the grouped shape the front end consumes.
//!
//! Storage holds one [`SkillSet`] per category (and, for soft skills, per
//! subcategory). [`SkillGroups::from_sets`] folds them into a fixed nested
//! structure in which every category and soft subcategory is always present.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Update};

// ─── Categories ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
  Professional,
  Technical,
  Technology,
  Soft,
}

impl SkillCategory {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Professional => "professional",
      Self::Technical => "technical",
      Self::Technology => "technology",
      Self::Soft => "soft",
    }
  }
}

impl fmt::Display for SkillCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SkillCategory {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "professional" => Ok(Self::Professional),
      "technical" => Ok(Self::Technical),
      "technology" => Ok(Self::Technology),
      "soft" => Ok(Self::Soft),
      other => Err(Error::UnknownVariant {
        kind:  "skill category",
        value: other.to_owned(),
      }),
    }
  }
}

/// Subdivision of [`SkillCategory::Soft`]; meaningless elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoftSkillGroup {
  Social,
  Process,
  Generic,
}

impl SoftSkillGroup {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Social => "social",
      Self::Process => "process",
      Self::Generic => "generic",
    }
  }
}

impl fmt::Display for SoftSkillGroup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SoftSkillGroup {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "social" => Ok(Self::Social),
      "process" => Ok(Self::Process),
      "generic" => Ok(Self::Generic),
      other => Err(Error::UnknownVariant {
        kind:  "soft skill group",
        value: other.to_owned(),
      }),
    }
  }
}

// ─── Stored document ─────────────────────────────────────────────────────────

/// One stored list of skills for a category (and optional soft subcategory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
  pub category:    SkillCategory,
  #[serde(default)]
  pub subcategory: Option<SoftSkillGroup>,
  pub skills:      Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSetUpdate {
  pub category:    Option<SkillCategory>,
  /// `Some(None)` clears the subcategory.
  pub subcategory: Option<Option<SoftSkillGroup>>,
  pub skills:      Option<Vec<String>>,
}

impl Update<SkillSet> for SkillSetUpdate {
  fn apply_to(self, t: &mut SkillSet) {
    if let Some(category) = self.category {
      t.category = category;
    }
    if let Some(subcategory) = self.subcategory {
      t.subcategory = subcategory;
    }
    if let Some(skills) = self.skills {
      t.skills = skills;
    }
  }
}

// ─── Grouped response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkills {
  pub social:  Vec<String>,
  pub process: Vec<String>,
  pub generic: Vec<String>,
}

/// All skills keyed by category. Every key is always present; categories
/// with no stored set are empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroups {
  pub professional: Vec<String>,
  pub technical:    Vec<String>,
  pub technology:   Vec<String>,
  pub soft:         SoftSkills,
}

impl SkillGroups {
  /// Fold stored sets into the grouped shape.
  ///
  /// A later set for the same slot replaces an earlier one. Soft sets without
  /// a subcategory land in `generic`.
  pub fn from_sets<I>(sets: I) -> Self
  where
    I: IntoIterator<Item = SkillSet>,
  {
    let mut groups = Self::default();
    for set in sets {
      *groups.slot_mut(set.category, set.subcategory) = set.skills;
    }
    groups
  }

  fn slot_mut(
    &mut self,
    category: SkillCategory,
    subcategory: Option<SoftSkillGroup>,
  ) -> &mut Vec<String> {
    match category {
      SkillCategory::Professional => &mut self.professional,
      SkillCategory::Technical => &mut self.technical,
      SkillCategory::Technology => &mut self.technology,
      SkillCategory::Soft => match subcategory.unwrap_or(SoftSkillGroup::Generic) {
        SoftSkillGroup::Social => &mut self.soft.social,
        SoftSkillGroup::Process => &mut self.soft.process,
        SoftSkillGroup::Generic => &mut self.soft.generic,
      },
    }
  }
}
