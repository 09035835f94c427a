//! [`SqliteStore`]: the SQLite implementation of [`PortfolioStore`].

use std::path::Path;

use folio_core::{
  Record,
  contact::{ContactMessage, ContactMessageUpdate},
  resource::{
    Certification, Education, Experience, Language, OrganizationExperience,
    PersonalInfo,
  },
  seed::PortfolioSeed,
  skills::SkillSet,
  store::PortfolioStore,
};
use rusqlite::{OptionalExtension as _, Row};
use uuid::Uuid;

use crate::{
  Result,
  encode::{
    RawCertification, RawContactMessage, RawEducation, RawExperience, RawLanguage,
    RawOrganizationExperience, RawPersonalInfo, RawSkillSet, encode_dt, encode_uuid,
  },
  schema::{CONTENT_TABLES, SCHEMA},
};

type ReadRow<R> = fn(&Row<'_>) -> rusqlite::Result<R>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A portfolio store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `sql` and read every row with `read`.
  async fn select_all<R>(&self, sql: String, read: ReadRow<R>) -> Result<Vec<R>>
  where
    R: Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], read)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Run `sql` and read the first row, if any.
  async fn select_first<R>(&self, sql: String, read: ReadRow<R>) -> Result<Option<R>>
  where
    R: Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| Ok(conn.query_row(&sql, [], read).optional()?))
      .await?;
    Ok(row)
  }
}

// ─── Row writers ─────────────────────────────────────────────────────────────

fn insert_personal_info(
  conn: &rusqlite::Connection,
  r: &RawPersonalInfo,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO personal_info (
       id, created_at, updated_at, name, title, subtitle, profile_image,
       location, email, phone, linkedin, cv_url, summary
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.name, r.title, r.subtitle,
      r.profile_image, r.location, r.email, r.phone, r.linkedin, r.cv_url, r.summary,
    ],
  )?;
  Ok(())
}

fn insert_experience(
  conn: &rusqlite::Connection,
  r: &RawExperience,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO experiences (
       id, created_at, updated_at, title, company, period, location,
       achievements, sort_order, is_active
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.title, r.company, r.period,
      r.location, r.achievements, r.sort_order, r.is_active,
    ],
  )?;
  Ok(())
}

fn insert_skill_set(
  conn: &rusqlite::Connection,
  r: &RawSkillSet,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO skills (id, created_at, updated_at, category, subcategory, skills)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.category, r.subcategory, r.skills,
    ],
  )?;
  Ok(())
}

fn insert_education(
  conn: &rusqlite::Connection,
  r: &RawEducation,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO education (
       id, created_at, updated_at, degree, university, faculty, major, gpa,
       period, location, achievements
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.degree, r.university, r.faculty,
      r.major, r.gpa, r.period, r.location, r.achievements,
    ],
  )?;
  Ok(())
}

fn insert_certification(
  conn: &rusqlite::Connection,
  r: &RawCertification,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO certifications (
       id, created_at, updated_at, title, issuer, date, kind, sort_order
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.title, r.issuer, r.date, r.kind,
      r.sort_order,
    ],
  )?;
  Ok(())
}

fn insert_language(
  conn: &rusqlite::Connection,
  r: &RawLanguage,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO languages (id, created_at, updated_at, language, level)
     VALUES (?1, ?2, ?3, ?4, ?5)",
    rusqlite::params![r.env.id, r.env.created_at, r.env.updated_at, r.language, r.level],
  )?;
  Ok(())
}

fn insert_organization_experience(
  conn: &rusqlite::Connection,
  r: &RawOrganizationExperience,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO organization_experiences (
       id, created_at, updated_at, title, organization, period, achievements
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.title, r.organization, r.period,
      r.achievements,
    ],
  )?;
  Ok(())
}

fn insert_contact_message(
  conn: &rusqlite::Connection,
  r: &RawContactMessage,
) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT INTO contact_messages (
       id, created_at, updated_at, name, email, company, subject, message, is_read
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    rusqlite::params![
      r.env.id, r.env.created_at, r.env.updated_at, r.name, r.email, r.company,
      r.subject, r.message, r.is_read,
    ],
  )?;
  Ok(())
}

/// A seed with every document already encoded, ready to move onto the
/// database thread.
struct RawSeed {
  personal_info:            RawPersonalInfo,
  experiences:              Vec<RawExperience>,
  skills:                   Vec<RawSkillSet>,
  education:                RawEducation,
  certifications:           Vec<RawCertification>,
  languages:                Vec<RawLanguage>,
  organization_experiences: Vec<RawOrganizationExperience>,
}

impl RawSeed {
  fn encode(seed: PortfolioSeed) -> Result<Self> {
    Ok(Self {
      personal_info:            RawPersonalInfo::from_record(&Record::new(seed.personal_info)),
      experiences:              seed
        .experiences
        .into_iter()
        .map(|e| RawExperience::from_record(&Record::new(e)))
        .collect::<Result<_>>()?,
      skills:                   seed
        .skills
        .into_iter()
        .map(|s| RawSkillSet::from_record(&Record::new(s)))
        .collect::<Result<_>>()?,
      education:                RawEducation::from_record(&Record::new(seed.education))?,
      certifications:           seed
        .certifications
        .into_iter()
        .map(|c| RawCertification::from_record(&Record::new(c)))
        .collect(),
      languages:                seed
        .languages
        .into_iter()
        .map(|l| RawLanguage::from_record(&Record::new(l)))
        .collect(),
      organization_experiences: seed
        .organization_experiences
        .into_iter()
        .map(|o| RawOrganizationExperience::from_record(&Record::new(o)))
        .collect::<Result<_>>()?,
    })
  }
}

// ─── PortfolioStore impl ─────────────────────────────────────────────────────

impl PortfolioStore for SqliteStore {
  type Error = crate::Error;

  // ── Singletons ────────────────────────────────────────────────────────────

  async fn personal_info(&self) -> Result<Option<Record<PersonalInfo>>> {
    let sql = format!(
      "SELECT {} FROM personal_info ORDER BY rowid LIMIT 1",
      RawPersonalInfo::COLUMNS
    );
    self
      .select_first(sql, RawPersonalInfo::from_row)
      .await?
      .map(RawPersonalInfo::into_record)
      .transpose()
  }

  async fn education(&self) -> Result<Option<Record<Education>>> {
    let sql = format!(
      "SELECT {} FROM education ORDER BY rowid LIMIT 1",
      RawEducation::COLUMNS
    );
    self
      .select_first(sql, RawEducation::from_row)
      .await?
      .map(RawEducation::into_record)
      .transpose()
  }

  // ── Collections ───────────────────────────────────────────────────────────

  async fn active_experiences(&self) -> Result<Vec<Record<Experience>>> {
    let sql = format!(
      "SELECT {} FROM experiences
       WHERE is_active = 1
       ORDER BY sort_order ASC, rowid ASC",
      RawExperience::COLUMNS
    );
    self
      .select_all(sql, RawExperience::from_row)
      .await?
      .into_iter()
      .map(RawExperience::into_record)
      .collect()
  }

  async fn skill_sets(&self) -> Result<Vec<Record<SkillSet>>> {
    let sql = format!("SELECT {} FROM skills ORDER BY rowid", RawSkillSet::COLUMNS);
    self
      .select_all(sql, RawSkillSet::from_row)
      .await?
      .into_iter()
      .map(RawSkillSet::into_record)
      .collect()
  }

  async fn certifications(&self) -> Result<Vec<Record<Certification>>> {
    let sql = format!(
      "SELECT {} FROM certifications ORDER BY sort_order ASC, rowid ASC",
      RawCertification::COLUMNS
    );
    self
      .select_all(sql, RawCertification::from_row)
      .await?
      .into_iter()
      .map(RawCertification::into_record)
      .collect()
  }

  async fn languages(&self) -> Result<Vec<Record<Language>>> {
    let sql = format!("SELECT {} FROM languages ORDER BY rowid", RawLanguage::COLUMNS);
    self
      .select_all(sql, RawLanguage::from_row)
      .await?
      .into_iter()
      .map(RawLanguage::into_record)
      .collect()
  }

  async fn organization_experiences(&self) -> Result<Vec<Record<OrganizationExperience>>> {
    let sql = format!(
      "SELECT {} FROM organization_experiences ORDER BY rowid",
      RawOrganizationExperience::COLUMNS
    );
    self
      .select_all(sql, RawOrganizationExperience::from_row)
      .await?
      .into_iter()
      .map(RawOrganizationExperience::into_record)
      .collect()
  }

  // ── Contact messages ──────────────────────────────────────────────────────

  async fn insert_contact_message(&self, record: Record<ContactMessage>) -> Result<()> {
    let raw = RawContactMessage::from_record(&record);
    self
      .conn
      .call(move |conn| {
        insert_contact_message(conn, &raw)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_contact_message(&self, id: Uuid) -> Result<Option<Record<ContactMessage>>> {
    let id_str = encode_uuid(id);
    let sql = format!(
      "SELECT {} FROM contact_messages WHERE id = ?1",
      RawContactMessage::COLUMNS
    );

    let raw: Option<RawContactMessage> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], RawContactMessage::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContactMessage::into_record).transpose()
  }

  async fn list_contact_messages(&self) -> Result<Vec<Record<ContactMessage>>> {
    let sql = format!(
      "SELECT {} FROM contact_messages ORDER BY created_at ASC, rowid ASC",
      RawContactMessage::COLUMNS
    );
    self
      .select_all(sql, RawContactMessage::from_row)
      .await?
      .into_iter()
      .map(RawContactMessage::into_record)
      .collect()
  }

  async fn update_contact_message(
    &self,
    id:     Uuid,
    update: ContactMessageUpdate,
  ) -> Result<Option<Record<ContactMessage>>> {
    let Some(mut record) = self.get_contact_message(id).await? else {
      return Ok(None);
    };
    record.apply(update);

    let id_str     = encode_uuid(record.id);
    let is_read    = record.data.is_read;
    let updated_at = encode_dt(record.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE contact_messages SET is_read = ?2, updated_at = ?3 WHERE id = ?1",
          rusqlite::params![id_str, is_read, updated_at],
        )?;
        Ok(())
      })
      .await?;

    Ok(Some(record))
  }

  // ── Administration ────────────────────────────────────────────────────────

  async fn seed(&self, seed: PortfolioSeed) -> Result<()> {
    let raw = RawSeed::encode(seed)?;

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for table in CONTENT_TABLES {
          tx.execute(&format!("DELETE FROM {table}"), [])?;
        }
        insert_personal_info(&tx, &raw.personal_info)?;
        for r in &raw.experiences {
          insert_experience(&tx, r)?;
        }
        for r in &raw.skills {
          insert_skill_set(&tx, r)?;
        }
        insert_education(&tx, &raw.education)?;
        for r in &raw.certifications {
          insert_certification(&tx, r)?;
        }
        for r in &raw.languages {
          insert_language(&tx, r)?;
        }
        for r in &raw.organization_experiences {
          insert_organization_experience(&tx, r)?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
