//! SQL schema for the folio SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.
//!
//! Every table carries the record envelope (`id`, `created_at`,
//! `updated_at`). No foreign keys: each collection is queried on its own.
//! Unsorted reads use `rowid` order.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS personal_info (
    id            TEXT PRIMARY KEY,
    created_at    TEXT NOT NULL,
    updated_at    TEXT NOT NULL,
    name          TEXT NOT NULL,
    title         TEXT NOT NULL,
    subtitle      TEXT NOT NULL,
    profile_image TEXT NOT NULL,
    location      TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL,
    linkedin      TEXT NOT NULL,
    cv_url        TEXT NOT NULL,
    summary       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS experiences (
    id           TEXT PRIMARY KEY,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL,
    title        TEXT NOT NULL,
    company      TEXT NOT NULL,
    period       TEXT NOT NULL,
    location     TEXT NOT NULL,
    achievements TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    sort_order   INTEGER NOT NULL DEFAULT 0,
    is_active    INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS skills (
    id          TEXT PRIMARY KEY,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    category    TEXT NOT NULL,   -- 'professional' | 'technical' | 'technology' | 'soft'
    subcategory TEXT,            -- 'social' | 'process' | 'generic' | NULL
    skills      TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE IF NOT EXISTS education (
    id           TEXT PRIMARY KEY,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL,
    degree       TEXT NOT NULL,
    university   TEXT NOT NULL,
    faculty      TEXT NOT NULL,
    major        TEXT NOT NULL,
    gpa          TEXT NOT NULL,
    period       TEXT NOT NULL,
    location     TEXT NOT NULL,
    achievements TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE IF NOT EXISTS certifications (
    id         TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    title      TEXT NOT NULL,
    issuer     TEXT NOT NULL,
    date       TEXT NOT NULL,
    kind       TEXT NOT NULL,
    sort_order INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS languages (
    id         TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    language   TEXT NOT NULL,
    level      TEXT NOT NULL     -- 'Native' | 'Proficient' | 'Basic'
);

CREATE TABLE IF NOT EXISTS organization_experiences (
    id           TEXT PRIMARY KEY,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL,
    title        TEXT NOT NULL,
    organization TEXT NOT NULL,
    period       TEXT NOT NULL,
    achievements TEXT NOT NULL DEFAULT '[]'
);

-- Written only by the public contact endpoint. Never cleared by seeding.
CREATE TABLE IF NOT EXISTS contact_messages (
    id         TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    name       TEXT NOT NULL,
    email      TEXT NOT NULL,
    company    TEXT,
    subject    TEXT NOT NULL,
    message    TEXT NOT NULL,
    is_read    INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS experiences_order_idx    ON experiences(is_active, sort_order);
CREATE INDEX IF NOT EXISTS certifications_order_idx ON certifications(sort_order);

PRAGMA user_version = 1;
";

/// Collections replaced by a seed, in deletion order.
pub const CONTENT_TABLES: &[&str] = &[
  "personal_info",
  "experiences",
  "skills",
  "education",
  "certifications",
  "languages",
  "organization_experiences",
];
