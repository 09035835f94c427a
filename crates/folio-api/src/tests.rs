//! Router tests against in-process test-double stores.

use std::{
  convert::Infallible,
  io,
  sync::{Arc, Mutex},
};

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use folio_core::{
  Record,
  contact::{ContactMessage, ContactMessageUpdate},
  resource::{
    Certification, Education, Experience, Language, OrganizationExperience,
    PersonalInfo,
  },
  seed::PortfolioSeed,
  skills::{SkillCategory, SkillSet, SoftSkillGroup},
  store::PortfolioStore,
};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;

use crate::api_router;

// ─── Memory store ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Collections {
  personal:       Vec<Record<PersonalInfo>>,
  education:      Vec<Record<Education>>,
  experiences:    Vec<Record<Experience>>,
  skills:         Vec<Record<SkillSet>>,
  certifications: Vec<Record<Certification>>,
  languages:      Vec<Record<Language>>,
  organizations:  Vec<Record<OrganizationExperience>>,
  messages:       Vec<Record<ContactMessage>>,
}

/// Vec-backed store. With `lose_writes` set, contact inserts succeed but are
/// never visible to reads.
#[derive(Default)]
struct MemoryStore {
  inner:       Mutex<Collections>,
  lose_writes: bool,
}

impl MemoryStore {
  fn seeded(seed: PortfolioSeed) -> Arc<Self> {
    let store = Self::default();
    store.load(seed);
    Arc::new(store)
  }

  fn load(&self, seed: PortfolioSeed) {
    let mut c = self.inner.lock().unwrap();
    c.personal = vec![Record::new(seed.personal_info)];
    c.education = vec![Record::new(seed.education)];
    c.experiences = seed.experiences.into_iter().map(Record::new).collect();
    c.skills = seed.skills.into_iter().map(Record::new).collect();
    c.certifications = seed.certifications.into_iter().map(Record::new).collect();
    c.languages = seed.languages.into_iter().map(Record::new).collect();
    c.organizations = seed
      .organization_experiences
      .into_iter()
      .map(Record::new)
      .collect();
  }

  fn message_count(&self) -> usize { self.inner.lock().unwrap().messages.len() }
}

impl PortfolioStore for MemoryStore {
  type Error = Infallible;

  async fn personal_info(&self) -> Result<Option<Record<PersonalInfo>>, Infallible> {
    Ok(self.inner.lock().unwrap().personal.first().cloned())
  }

  async fn education(&self) -> Result<Option<Record<Education>>, Infallible> {
    Ok(self.inner.lock().unwrap().education.first().cloned())
  }

  async fn active_experiences(&self) -> Result<Vec<Record<Experience>>, Infallible> {
    let mut active: Vec<_> = self
      .inner
      .lock()
      .unwrap()
      .experiences
      .iter()
      .filter(|e| e.data.is_active)
      .cloned()
      .collect();
    active.sort_by_key(|e| e.data.order);
    Ok(active)
  }

  async fn skill_sets(&self) -> Result<Vec<Record<SkillSet>>, Infallible> {
    Ok(self.inner.lock().unwrap().skills.clone())
  }

  async fn certifications(&self) -> Result<Vec<Record<Certification>>, Infallible> {
    let mut certs = self.inner.lock().unwrap().certifications.clone();
    certs.sort_by_key(|c| c.data.order);
    Ok(certs)
  }

  async fn languages(&self) -> Result<Vec<Record<Language>>, Infallible> {
    Ok(self.inner.lock().unwrap().languages.clone())
  }

  async fn organization_experiences(
    &self,
  ) -> Result<Vec<Record<OrganizationExperience>>, Infallible> {
    Ok(self.inner.lock().unwrap().organizations.clone())
  }

  async fn insert_contact_message(
    &self,
    record: Record<ContactMessage>,
  ) -> Result<(), Infallible> {
    if !self.lose_writes {
      self.inner.lock().unwrap().messages.push(record);
    }
    Ok(())
  }

  async fn get_contact_message(
    &self,
    id: Uuid,
  ) -> Result<Option<Record<ContactMessage>>, Infallible> {
    Ok(
      self
        .inner
        .lock()
        .unwrap()
        .messages
        .iter()
        .find(|m| m.id == id)
        .cloned(),
    )
  }

  async fn list_contact_messages(&self) -> Result<Vec<Record<ContactMessage>>, Infallible> {
    Ok(self.inner.lock().unwrap().messages.clone())
  }

  async fn update_contact_message(
    &self,
    id: Uuid,
    update: ContactMessageUpdate,
  ) -> Result<Option<Record<ContactMessage>>, Infallible> {
    let mut c = self.inner.lock().unwrap();
    Ok(c.messages.iter_mut().find(|m| m.id == id).map(|m| {
      m.apply(update);
      m.clone()
    }))
  }

  async fn seed(&self, seed: PortfolioSeed) -> Result<(), Infallible> {
    self.load(seed);
    Ok(())
  }
}

// ─── Failing store ───────────────────────────────────────────────────────────

const SECRET_DETAIL: &str = "connection refused by 10.0.0.7:27017";

/// Every operation fails with an error whose text must never reach clients.
struct FailingStore;

fn fail<T>() -> Result<T, io::Error> { Err(io::Error::other(SECRET_DETAIL)) }

impl PortfolioStore for FailingStore {
  type Error = io::Error;

  async fn personal_info(&self) -> io::Result<Option<Record<PersonalInfo>>> { fail() }

  async fn education(&self) -> io::Result<Option<Record<Education>>> { fail() }

  async fn active_experiences(&self) -> io::Result<Vec<Record<Experience>>> { fail() }

  async fn skill_sets(&self) -> io::Result<Vec<Record<SkillSet>>> { fail() }

  async fn certifications(&self) -> io::Result<Vec<Record<Certification>>> { fail() }

  async fn languages(&self) -> io::Result<Vec<Record<Language>>> { fail() }

  async fn organization_experiences(
    &self,
  ) -> io::Result<Vec<Record<OrganizationExperience>>> {
    fail()
  }

  async fn insert_contact_message(&self, _: Record<ContactMessage>) -> io::Result<()> {
    fail()
  }

  async fn get_contact_message(&self, _: Uuid) -> io::Result<Option<Record<ContactMessage>>> {
    fail()
  }

  async fn list_contact_messages(&self) -> io::Result<Vec<Record<ContactMessage>>> {
    fail()
  }

  async fn update_contact_message(
    &self,
    _: Uuid,
    _: ContactMessageUpdate,
  ) -> io::Result<Option<Record<ContactMessage>>> {
    fail()
  }

  async fn seed(&self, _: PortfolioSeed) -> io::Result<()> { fail() }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn sample_seed() -> PortfolioSeed {
  serde_json::from_value(json!({
    "personal_info": {
      "name": "Dewi Lestari",
      "title": "HR Professional",
      "subtitle": "Talent Acquisition",
      "profile_image": "https://example.com/me.jpg",
      "location": "Malang",
      "email": "dewi@example.com",
      "phone": "0800-000-000",
      "linkedin": "https://linkedin.com/in/dewi",
      "cv_url": "https://example.com/cv.pdf",
      "summary": "Recruiter."
    },
    "experiences": [
      { "title": "Later", "company": "B", "period": "2025", "location": "ID",
        "achievements": [], "order": 2 },
      { "title": "Retired", "company": "C", "period": "2019", "location": "ID",
        "achievements": [], "order": 0, "is_active": false },
      { "title": "Earlier", "company": "A", "period": "2024", "location": "ID",
        "achievements": ["Hired 40 people"], "order": 1 }
    ],
    "skills": [
      { "category": "professional", "skills": ["Recruitment"] },
      { "category": "soft", "subcategory": "process", "skills": ["Planning"] },
      { "category": "soft", "skills": ["Grit"] }
    ],
    "education": {
      "degree": "Bachelor of Laws",
      "university": "Universitas Contoh",
      "faculty": "Law",
      "major": "Law",
      "gpa": "3.75/4.00",
      "period": "2020 - 2024",
      "location": "Malang",
      "achievements": []
    },
    "certifications": [
      { "title": "Second", "issuer": "X", "date": "2025", "type": "Professional Certification", "order": 2 },
      { "title": "First", "issuer": "Y", "date": "2024", "type": "Professional Certification", "order": 1 }
    ],
    "languages": [
      { "language": "Indonesian", "level": "Native" },
      { "language": "English", "level": "Proficient" }
    ],
    "organization_experiences": [
      { "title": "Chair", "organization": "Student Senate", "period": "2022", "achievements": [] }
    ]
  }))
  .expect("sample seed")
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

async fn send_raw<S>(store: Arc<S>, req: Request<Body>) -> (StatusCode, Vec<u8>)
where
  S: PortfolioStore + 'static,
{
  let resp = api_router(store).oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, bytes.to_vec())
}

async fn send<S>(store: Arc<S>, req: Request<Body>) -> (StatusCode, Value)
where
  S: PortfolioStore + 'static,
{
  let (status, bytes) = send_raw(store, req).await;
  let value = serde_json::from_slice(&bytes)
    .unwrap_or_else(|e| panic!("non-JSON body ({e}): {}", String::from_utf8_lossy(&bytes)));
  (status, value)
}

fn valid_contact() -> Value {
  json!({ "name": "A", "email": "a@b.com", "subject": "S", "message": "M" })
}

// ─── Singletons ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn singletons_404_when_empty() {
  let store = Arc::new(MemoryStore::default());
  for uri in ["/personal", "/education"] {
    let (status, body) = send(store.clone(), get(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    assert!(body["error"].is_string());
  }
}

#[tokio::test]
async fn personal_returns_string_id() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/personal")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["name"], "Dewi Lestari");
  let id = body["_id"].as_str().expect("string id");
  assert!(Uuid::parse_str(id).is_ok());
  assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn education_returns_document() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/education")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["gpa"], "3.75/4.00");
}

// ─── Collections ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn experiences_hide_inactive_and_sort() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/experiences")).await;
  assert_eq!(status, StatusCode::OK);

  let items = body.as_array().unwrap();
  let titles: Vec<_> = items.iter().map(|e| e["title"].as_str().unwrap()).collect();
  assert_eq!(titles, ["Earlier", "Later"]);

  let orders: Vec<_> = items.iter().map(|e| e["order"].as_i64().unwrap()).collect();
  assert!(orders.windows(2).all(|w| w[0] <= w[1]));
  assert!(items.iter().all(|e| e["is_active"] == json!(true)));
}

#[tokio::test]
async fn empty_collections_are_empty_arrays() {
  let store = Arc::new(MemoryStore::default());
  for uri in ["/experiences", "/certifications", "/languages", "/organizations"] {
    let (status, body) = send(store.clone(), get(uri)).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    assert_eq!(body, json!([]), "{uri}");
  }
}

#[tokio::test]
async fn certifications_lowest_order_first() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/certifications")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["order"], 1);
  assert_eq!(body[0]["title"], "First");
  assert_eq!(body[0]["type"], "Professional Certification");
  assert_eq!(body[1]["order"], 2);
}

#[tokio::test]
async fn languages_reads_are_byte_identical() {
  let store = MemoryStore::seeded(sample_seed());
  let (s1, first) = send_raw(store.clone(), get("/languages")).await;
  let (s2, second) = send_raw(store, get("/languages")).await;
  assert_eq!(s1, StatusCode::OK);
  assert_eq!(s2, StatusCode::OK);
  assert_eq!(first, second);
}

#[tokio::test]
async fn organizations_are_listed() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/organizations")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["organization"], "Student Senate");
}

// ─── Skills ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn skills_shape_is_total_when_empty() {
  let store = Arc::new(MemoryStore::default());
  let (status, body) = send(store, get("/skills")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!({
      "professional": [],
      "technical": [],
      "technology": [],
      "soft": { "social": [], "process": [], "generic": [] }
    })
  );
}

#[tokio::test]
async fn skills_are_grouped() {
  let store = MemoryStore::seeded(sample_seed());
  let (status, body) = send(store, get("/skills")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["professional"], json!(["Recruitment"]));
  assert_eq!(body["technical"], json!([]));
  assert_eq!(body["soft"]["process"], json!(["Planning"]));
  assert_eq!(body["soft"]["generic"], json!(["Grit"]));
  assert_eq!(body["soft"]["social"], json!([]));
}

#[tokio::test]
async fn skills_from_store_api_match_grouping() {
  let store = Arc::new(MemoryStore::default());
  let mut seed = sample_seed();
  seed.skills = vec![SkillSet {
    category:    SkillCategory::Soft,
    subcategory: Some(SoftSkillGroup::Social),
    skills:      vec!["Empathy".into()],
  }];
  store.seed(seed).await.unwrap();

  let (_, body) = send(store, get("/skills")).await;
  assert_eq!(body["soft"]["social"], json!(["Empathy"]));
  assert_eq!(body["professional"], json!([]));
}

// ─── Contact ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn contact_submission_is_stored_and_echoed() {
  let store = Arc::new(MemoryStore::default());
  let (status, body) =
    send(store.clone(), post_json("/contact", &valid_contact().to_string())).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["is_read"], json!(false));
  assert_eq!(body["name"], "A");
  assert_eq!(body["email"], "a@b.com");
  assert_eq!(body["company"], Value::Null);
  assert!(!body["_id"].as_str().unwrap().is_empty());
  assert_eq!(body["created_at"], body["updated_at"]);

  let stored = store.list_contact_messages().await.unwrap();
  assert_eq!(stored.len(), 1);
  assert_eq!(stored[0].id.to_string(), body["_id"].as_str().unwrap());
}

#[tokio::test]
async fn contact_keeps_company() {
  let store = Arc::new(MemoryStore::default());
  let mut payload = valid_contact();
  payload["company"] = json!("TechCorp Solutions");
  let (status, body) = send(store, post_json("/contact", &payload.to_string())).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["company"], "TechCorp Solutions");
}

#[tokio::test]
async fn invalid_email_rejected_before_persisting() {
  let store = Arc::new(MemoryStore::default());
  let mut payload = valid_contact();
  payload["email"] = json!("not-an-email");

  let (status, body) = send(store.clone(), post_json("/contact", &payload.to_string())).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(body["fields"][0]["field"], "email");
  assert_eq!(store.message_count(), 0);
}

#[tokio::test]
async fn missing_fields_reported_together() {
  let store = Arc::new(MemoryStore::default());
  let (status, body) = send(store.clone(), post_json("/contact", r#"{"email":"a@b.com"}"#)).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let fields: Vec<_> = body["fields"]
    .as_array()
    .unwrap()
    .iter()
    .map(|f| f["field"].as_str().unwrap())
    .collect();
  assert_eq!(fields, ["name", "subject", "message"]);
  assert_eq!(store.message_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
  let store = Arc::new(MemoryStore::default());
  let (status, body) = send(store.clone(), post_json("/contact", "{not json")).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
  assert_eq!(store.message_count(), 0);
}

#[tokio::test]
async fn lost_write_is_internal_error() {
  let store = Arc::new(MemoryStore { lose_writes: true, ..Default::default() });
  let (status, body) = send(store, post_json("/contact", &valid_contact().to_string())).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["error"], "internal server error");
}

// ─── Store failures ──────────────────────────────────────────────────────────

#[tokio::test]
async fn store_failures_map_to_500_without_detail() {
  let store = Arc::new(FailingStore);
  let uris = [
    "/personal",
    "/education",
    "/experiences",
    "/skills",
    "/certifications",
    "/languages",
    "/organizations",
  ];
  for uri in uris {
    let (status, bytes) = send_raw(store.clone(), get(uri)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains(SECRET_DETAIL), "{uri} leaked: {text}");
  }

  let (status, body) =
    send(store, post_json("/contact", &valid_contact().to_string())).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn unknown_route_is_404() {
  let store = Arc::new(MemoryStore::default());
  let (status, _) = send_raw(store, get("/contact-messages")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
