//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as fixed-width RFC 3339 strings. String lists are stored as
//! compact JSON. UUIDs are stored as hyphenated lowercase strings. Enums are
//! stored as their wire names.
//!
//! Each `Raw*` type mirrors one table row. `from_record` encodes for INSERT;
//! `from_row` reads a `SELECT {COLUMNS}` row; `into_record` decodes.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_core::{
  Record,
  contact::ContactMessage,
  resource::{
    Certification, Education, Experience, Language, LanguageLevel,
    OrganizationExperience, PersonalInfo,
  },
  skills::{SkillCategory, SkillSet, SoftSkillGroup},
};
use rusqlite::Row;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

/// Fixed-width (nanosecond, `Z`-suffixed) so stored values sort
/// chronologically as text.
pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── String lists ────────────────────────────────────────────────────────────

pub fn encode_list(items: &[String]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

pub fn decode_list(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The `id`, `created_at`, `updated_at` columns every table starts with.
pub struct RawEnvelope {
  pub id:         String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawEnvelope {
  fn encode<T>(record: &Record<T>) -> Self {
    Self {
      id:         encode_uuid(record.id),
      created_at: encode_dt(record.created_at),
      updated_at: encode_dt(record.updated_at),
    }
  }

  fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      created_at: row.get(1)?,
      updated_at: row.get(2)?,
    })
  }

  fn wrap<T>(self, data: T) -> Result<Record<T>> {
    Ok(Record {
      id: decode_uuid(&self.id)?,
      data,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

// ─── Personal info ───────────────────────────────────────────────────────────

pub struct RawPersonalInfo {
  pub env:           RawEnvelope,
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

impl RawPersonalInfo {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, name, title, subtitle, \
    profile_image, location, email, phone, linkedin, cv_url, summary";

  pub fn from_record(r: &Record<PersonalInfo>) -> Self {
    let d = &r.data;
    Self {
      env:           RawEnvelope::encode(r),
      name:          d.name.clone(),
      title:         d.title.clone(),
      subtitle:      d.subtitle.clone(),
      profile_image: d.profile_image.clone(),
      location:      d.location.clone(),
      email:         d.email.clone(),
      phone:         d.phone.clone(),
      linkedin:      d.linkedin.clone(),
      cv_url:        d.cv_url.clone(),
      summary:       d.summary.clone(),
    }
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:           RawEnvelope::read(row)?,
      name:          row.get(3)?,
      title:         row.get(4)?,
      subtitle:      row.get(5)?,
      profile_image: row.get(6)?,
      location:      row.get(7)?,
      email:         row.get(8)?,
      phone:         row.get(9)?,
      linkedin:      row.get(10)?,
      cv_url:        row.get(11)?,
      summary:       row.get(12)?,
    })
  }

  pub fn into_record(self) -> Result<Record<PersonalInfo>> {
    self.env.wrap(PersonalInfo {
      name:          self.name,
      title:         self.title,
      subtitle:      self.subtitle,
      profile_image: self.profile_image,
      location:      self.location,
      email:         self.email,
      phone:         self.phone,
      linkedin:      self.linkedin,
      cv_url:        self.cv_url,
      summary:       self.summary,
    })
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

pub struct RawExperience {
  pub env:          RawEnvelope,
  pub title:        String,
  pub company:      String,
  pub period:       String,
  pub location:     String,
  pub achievements: String,
  pub sort_order:   i64,
  pub is_active:    bool,
}

impl RawExperience {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, title, company, period, \
    location, achievements, sort_order, is_active";

  pub fn from_record(r: &Record<Experience>) -> Result<Self> {
    let d = &r.data;
    Ok(Self {
      env:          RawEnvelope::encode(r),
      title:        d.title.clone(),
      company:      d.company.clone(),
      period:       d.period.clone(),
      location:     d.location.clone(),
      achievements: encode_list(&d.achievements)?,
      sort_order:   d.order,
      is_active:    d.is_active,
    })
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:          RawEnvelope::read(row)?,
      title:        row.get(3)?,
      company:      row.get(4)?,
      period:       row.get(5)?,
      location:     row.get(6)?,
      achievements: row.get(7)?,
      sort_order:   row.get(8)?,
      is_active:    row.get(9)?,
    })
  }

  pub fn into_record(self) -> Result<Record<Experience>> {
    let achievements = decode_list(&self.achievements)?;
    self.env.wrap(Experience {
      title: self.title,
      company: self.company,
      period: self.period,
      location: self.location,
      achievements,
      order: self.sort_order,
      is_active: self.is_active,
    })
  }
}

// ─── Skill set ───────────────────────────────────────────────────────────────

pub struct RawSkillSet {
  pub env:         RawEnvelope,
  pub category:    String,
  pub subcategory: Option<String>,
  pub skills:      String,
}

impl RawSkillSet {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, category, subcategory, skills";

  pub fn from_record(r: &Record<SkillSet>) -> Result<Self> {
    let d = &r.data;
    Ok(Self {
      env:         RawEnvelope::encode(r),
      category:    d.category.as_str().to_owned(),
      subcategory: d.subcategory.map(|s| s.as_str().to_owned()),
      skills:      encode_list(&d.skills)?,
    })
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:         RawEnvelope::read(row)?,
      category:    row.get(3)?,
      subcategory: row.get(4)?,
      skills:      row.get(5)?,
    })
  }

  pub fn into_record(self) -> Result<Record<SkillSet>> {
    let category = self.category.parse::<SkillCategory>()?;
    let subcategory = self.subcategory.as_deref().map(str::parse::<SoftSkillGroup>).transpose()?;
    let skills = decode_list(&self.skills)?;
    self.env.wrap(SkillSet { category, subcategory, skills })
  }
}

// ─── Education ───────────────────────────────────────────────────────────────

pub struct RawEducation {
  pub env:          RawEnvelope,
  pub degree:       String,
  pub university:   String,
  pub faculty:      String,
  pub major:        String,
  pub gpa:          String,
  pub period:       String,
  pub location:     String,
  pub achievements: String,
}

impl RawEducation {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, degree, university, faculty, \
    major, gpa, period, location, achievements";

  pub fn from_record(r: &Record<Education>) -> Result<Self> {
    let d = &r.data;
    Ok(Self {
      env:          RawEnvelope::encode(r),
      degree:       d.degree.clone(),
      university:   d.university.clone(),
      faculty:      d.faculty.clone(),
      major:        d.major.clone(),
      gpa:          d.gpa.clone(),
      period:       d.period.clone(),
      location:     d.location.clone(),
      achievements: encode_list(&d.achievements)?,
    })
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:          RawEnvelope::read(row)?,
      degree:       row.get(3)?,
      university:   row.get(4)?,
      faculty:      row.get(5)?,
      major:        row.get(6)?,
      gpa:          row.get(7)?,
      period:       row.get(8)?,
      location:     row.get(9)?,
      achievements: row.get(10)?,
    })
  }

  pub fn into_record(self) -> Result<Record<Education>> {
    let achievements = decode_list(&self.achievements)?;
    self.env.wrap(Education {
      degree: self.degree,
      university: self.university,
      faculty: self.faculty,
      major: self.major,
      gpa: self.gpa,
      period: self.period,
      location: self.location,
      achievements,
    })
  }
}

// ─── Certification ───────────────────────────────────────────────────────────

pub struct RawCertification {
  pub env:        RawEnvelope,
  pub title:      String,
  pub issuer:     String,
  pub date:       String,
  pub kind:       String,
  pub sort_order: i64,
}

impl RawCertification {
  pub const COLUMNS: &'static str =
    "id, created_at, updated_at, title, issuer, date, kind, sort_order";

  pub fn from_record(r: &Record<Certification>) -> Self {
    let d = &r.data;
    Self {
      env:        RawEnvelope::encode(r),
      title:      d.title.clone(),
      issuer:     d.issuer.clone(),
      date:       d.date.clone(),
      kind:       d.kind.clone(),
      sort_order: d.order,
    }
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:        RawEnvelope::read(row)?,
      title:      row.get(3)?,
      issuer:     row.get(4)?,
      date:       row.get(5)?,
      kind:       row.get(6)?,
      sort_order: row.get(7)?,
    })
  }

  pub fn into_record(self) -> Result<Record<Certification>> {
    self.env.wrap(Certification {
      title:  self.title,
      issuer: self.issuer,
      date:   self.date,
      kind:   self.kind,
      order:  self.sort_order,
    })
  }
}

// ─── Language ────────────────────────────────────────────────────────────────

pub struct RawLanguage {
  pub env:      RawEnvelope,
  pub language: String,
  pub level:    String,
}

impl RawLanguage {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, language, level";

  pub fn from_record(r: &Record<Language>) -> Self {
    Self {
      env:      RawEnvelope::encode(r),
      language: r.data.language.clone(),
      level:    r.data.level.as_str().to_owned(),
    }
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:      RawEnvelope::read(row)?,
      language: row.get(3)?,
      level:    row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<Record<Language>> {
    let level = self.level.parse::<LanguageLevel>()?;
    self.env.wrap(Language { language: self.language, level })
  }
}

// ─── Organization experience ─────────────────────────────────────────────────

pub struct RawOrganizationExperience {
  pub env:          RawEnvelope,
  pub title:        String,
  pub organization: String,
  pub period:       String,
  pub achievements: String,
}

impl RawOrganizationExperience {
  pub const COLUMNS: &'static str =
    "id, created_at, updated_at, title, organization, period, achievements";

  pub fn from_record(r: &Record<OrganizationExperience>) -> Result<Self> {
    let d = &r.data;
    Ok(Self {
      env:          RawEnvelope::encode(r),
      title:        d.title.clone(),
      organization: d.organization.clone(),
      period:       d.period.clone(),
      achievements: encode_list(&d.achievements)?,
    })
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:          RawEnvelope::read(row)?,
      title:        row.get(3)?,
      organization: row.get(4)?,
      period:       row.get(5)?,
      achievements: row.get(6)?,
    })
  }

  pub fn into_record(self) -> Result<Record<OrganizationExperience>> {
    let achievements = decode_list(&self.achievements)?;
    self.env.wrap(OrganizationExperience {
      title: self.title,
      organization: self.organization,
      period: self.period,
      achievements,
    })
  }
}

// ─── Contact message ─────────────────────────────────────────────────────────

pub struct RawContactMessage {
  pub env:     RawEnvelope,
  pub name:    String,
  pub email:   String,
  pub company: Option<String>,
  pub subject: String,
  pub message: String,
  pub is_read: bool,
}

impl RawContactMessage {
  pub const COLUMNS: &'static str = "id, created_at, updated_at, name, email, company, \
    subject, message, is_read";

  pub fn from_record(r: &Record<ContactMessage>) -> Self {
    let d = &r.data;
    Self {
      env:     RawEnvelope::encode(r),
      name:    d.name.clone(),
      email:   d.email.clone(),
      company: d.company.clone(),
      subject: d.subject.clone(),
      message: d.message.clone(),
      is_read: d.is_read,
    }
  }

  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      env:     RawEnvelope::read(row)?,
      name:    row.get(3)?,
      email:   row.get(4)?,
      company: row.get(5)?,
      subject: row.get(6)?,
      message: row.get(7)?,
      is_read: row.get(8)?,
    })
  }

  pub fn into_record(self) -> Result<Record<ContactMessage>> {
    self.env.wrap(ContactMessage {
      name:    self.name,
      email:   self.email,
      company: self.company,
      subject: self.subject,
      message: self.message,
      is_read: self.is_read,
    })
  }
}
