//! Lead persistence
//!
//! Records go to Supabase through its PostgREST endpoint. When no Supabase
//! project is configured an in-process store with the same uniqueness rules
//! takes over, which is what local development and the API tests run against.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::error::{PG_UNIQUE_VIOLATION, StoreError};
use super::submission::FormKind;
use crate::core::config::{Config, StoreBackend};

/// Where lead records are written
pub enum LeadStore {
    Supabase(SupabaseStore),
    Memory(MemoryStore),
}

impl LeadStore {
    /// Build the backend selected in the config.
    ///
    /// Supabase is the default and needs both credentials; the in-memory
    /// store is only used when explicitly requested.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        match config.store_backend {
            StoreBackend::Memory => {
                tracing::warn!("LEADS_STORE=memory: lead submissions are kept in memory only");
                Ok(Self::Memory(MemoryStore::new()))
            }
            StoreBackend::Supabase => {
                let (url, key) = config.supabase_credentials().ok_or_else(|| {
                    StoreError::NotConfigured(
                        "SUPABASE_URL and SUPABASE_ANON_KEY must be set \
                         (or LEADS_STORE=memory for local development)"
                            .to_string(),
                    )
                })?;
                Ok(Self::Supabase(SupabaseStore::new(url, key, config.request_timeout)?))
            }
        }
    }

    /// Insert one record and return it as stored
    pub async fn insert<T: Serialize>(&self, kind: FormKind, record: &T) -> Result<Value, StoreError> {
        match self {
            Self::Supabase(store) => store.insert(kind, record).await,
            Self::Memory(store) => store.insert(kind, record).await,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Supabase(_) => "supabase",
            Self::Memory(_) => "memory",
        }
    }
}

// =============================================================================
// SUPABASE
// =============================================================================

/// Insert-only client for Supabase's REST interface
pub struct SupabaseStore {
    client: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

/// Error body PostgREST sends on failure
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl SupabaseStore {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    pub async fn insert<T: Serialize>(&self, kind: FormKind, record: &T) -> Result<Value, StoreError> {
        let table = kind.table();

        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Supabase insert into {}: status {}", table, status);

        if status.is_success() {
            first_row(&body)
        } else {
            Err(classify_error(table, status.as_u16(), &body))
        }
    }
}

/// `return=representation` answers with the inserted rows as an array
fn first_row(body: &str) -> Result<Value, StoreError> {
    let rows: Vec<Value> = serde_json::from_str(body)
        .map_err(|e| StoreError::InvalidResponse(format!("expected a JSON array: {}", e)))?;

    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::InvalidResponse("insert returned no rows".to_string()))
}

fn classify_error(table: &'static str, status: u16, body: &str) -> StoreError {
    let parsed: PostgrestError = serde_json::from_str(body).unwrap_or_default();

    if parsed.code.as_deref() == Some(PG_UNIQUE_VIOLATION) || status == 409 {
        return StoreError::Duplicate {
            table,
            detail: parsed
                .details
                .or(parsed.message)
                .unwrap_or_else(|| "unique constraint violated".to_string()),
        };
    }

    let mut message = parsed.message.unwrap_or_else(|| body.trim().to_string());
    if let Some(hint) = parsed.hint {
        message = format!("{} (hint: {})", message, hint);
    }

    StoreError::Rejected {
        status,
        code: parsed.code,
        message,
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local tables with the datastore's uniqueness rules
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert<T: Serialize>(&self, kind: FormKind, record: &T) -> Result<Value, StoreError> {
        let mut row = serde_json::to_value(record)?;
        let fields = row
            .as_object_mut()
            .ok_or_else(|| StoreError::InvalidResponse("record is not a JSON object".to_string()))?;

        let mut tables = self.tables.lock().await;
        let rows = tables.entry(kind.table()).or_default();

        if let Some(detail) = find_conflict(kind, fields, rows) {
            return Err(StoreError::Duplicate {
                table: kind.table(),
                detail,
            });
        }

        stamp(kind, fields);
        rows.push(row.clone());

        Ok(row)
    }

    /// Number of stored records of one kind
    pub async fn count(&self, kind: FormKind) -> usize {
        self.tables
            .lock()
            .await
            .get(kind.table())
            .map_or(0, Vec::len)
    }
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Waitlist: one row per email. Assessment: one pending request per email and website.
fn find_conflict(kind: FormKind, fields: &Map<String, Value>, rows: &[Value]) -> Option<String> {
    let mut existing = rows.iter().filter_map(Value::as_object);

    match kind {
        FormKind::Waitlist => {
            let email = field(fields, "email")?;
            existing
                .any(|row| field(row, "email") == Some(email))
                .then(|| format!("Key (email)=({}) already exists.", email))
        }
        FormKind::Assessment => {
            let email = field(fields, "email")?;
            let website = field(fields, "website")?;
            existing
                .any(|row| {
                    field(row, "email") == Some(email)
                        && field(row, "website") == Some(website)
                        && field(row, "status") == Some("pending")
                })
                .then(|| {
                    format!(
                        "Key (email, website)=({}, {}) already has a pending request.",
                        email, website
                    )
                })
        }
        FormKind::Contact => None,
    }
}

/// Fill in the columns the datastore would default
fn stamp(kind: FormKind, fields: &mut Map<String, Value>) {
    let now = Utc::now().to_rfc3339();
    fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));

    match kind {
        FormKind::Assessment => {
            fields.insert("status".to_string(), Value::String("pending".to_string()));
            fields.insert("requested_at".to_string(), Value::String(now));
        }
        FormKind::Waitlist | FormKind::Contact => {
            fields.insert("created_at".to_string(), Value::String(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leads::{AssessmentRequest, ContactMessage, WaitlistSignup};

    fn signup(email: &str) -> WaitlistSignup {
        WaitlistSignup {
            email: email.to_string(),
            persona: "agency".to_string(),
            website: None,
        }
    }

    fn request(email: &str, website: &str) -> AssessmentRequest {
        AssessmentRequest {
            email: email.to_string(),
            website: website.to_string(),
            persona: "designer".to_string(),
        }
    }

    // ========================================================================
    // PostgREST response handling
    // ========================================================================

    #[test]
    fn test_unique_violation_code_is_duplicate() {
        let body = r#"{"code":"23505","details":"Key (email)=(a@b.co) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"waitlist_signups_email_key\""}"#;

        match classify_error("waitlist_signups", 409, body) {
            StoreError::Duplicate { table, detail } => {
                assert_eq!(table, "waitlist_signups");
                assert!(detail.contains("a@b.co"));
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict_status_without_body_is_duplicate() {
        assert!(matches!(
            classify_error("assessment_requests", 409, ""),
            StoreError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_other_errors_are_rejected() {
        let body = r#"{"code":"42501","details":null,"hint":"check RLS policy","message":"permission denied for table contact_messages"}"#;

        match classify_error("contact_messages", 401, body) {
            StoreError::Rejected {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code.as_deref(), Some("42501"));
                assert!(message.contains("permission denied"));
                assert!(message.contains("check RLS policy"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_error_body_is_kept() {
        match classify_error("contact_messages", 503, "upstream connect error\n") {
            StoreError::Rejected { message, code, .. } => {
                assert_eq!(message, "upstream connect error");
                assert!(code.is_none());
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_first_row() {
        let row = first_row(r#"[{"id":"1","email":"a@b.co"}]"#).unwrap();
        assert_eq!(row["email"], "a@b.co");

        assert!(matches!(first_row("[]"), Err(StoreError::InvalidResponse(_))));
        assert!(matches!(first_row("{}"), Err(StoreError::InvalidResponse(_))));
    }

    #[test]
    fn test_table_url() {
        let store = SupabaseStore::new(
            "https://project.supabase.co/",
            "anon",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            store.table_url("waitlist_signups"),
            "https://project.supabase.co/rest/v1/waitlist_signups"
        );
    }

    // ========================================================================
    // Memory store
    // ========================================================================

    #[tokio::test]
    async fn test_memory_insert_stamps_defaults() {
        let store = MemoryStore::new();
        let row = store
            .insert(FormKind::Waitlist, &signup("a@b.co"))
            .await
            .unwrap();

        assert_eq!(row["email"], "a@b.co");
        assert!(row["id"].as_str().is_some());
        assert!(row["created_at"].as_str().is_some());
        assert!(row.get("website").is_none());
        assert_eq!(store.count(FormKind::Waitlist).await, 1);
    }

    #[tokio::test]
    async fn test_memory_waitlist_email_is_unique() {
        let store = MemoryStore::new();
        store
            .insert(FormKind::Waitlist, &signup("a@b.co"))
            .await
            .unwrap();

        let err = store
            .insert(FormKind::Waitlist, &signup("a@b.co"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.count(FormKind::Waitlist).await, 1);
    }

    #[tokio::test]
    async fn test_memory_assessment_unique_per_pending_site() {
        let store = MemoryStore::new();
        let row = store
            .insert(FormKind::Assessment, &request("a@b.co", "https://one.com"))
            .await
            .unwrap();
        assert_eq!(row["status"], "pending");
        assert!(row["requested_at"].as_str().is_some());

        // Different site from the same person is fine
        store
            .insert(FormKind::Assessment, &request("a@b.co", "https://two.com"))
            .await
            .unwrap();

        let err = store
            .insert(FormKind::Assessment, &request("a@b.co", "https://one.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_memory_contact_messages_are_not_deduplicated() {
        let store = MemoryStore::new();
        let message = ContactMessage {
            email: "a@b.co".to_string(),
            subject: "Hello".to_string(),
            message: "A message that is long enough".to_string(),
        };

        store.insert(FormKind::Contact, &message).await.unwrap();
        store.insert(FormKind::Contact, &message).await.unwrap();

        assert_eq!(store.count(FormKind::Contact).await, 2);
    }

    fn store_config(url: Option<&str>, backend: StoreBackend) -> Config {
        Config {
            supabase_url: url.map(str::to_string),
            supabase_anon_key: url.map(|_| "anon".to_string()),
            request_timeout: Duration::from_secs(1),
            store_backend: backend,
        }
    }

    #[tokio::test]
    async fn test_lead_store_dispatches_to_memory() {
        let store = LeadStore::from_config(&store_config(None, StoreBackend::Memory)).unwrap();
        assert_eq!(store.backend_name(), "memory");

        store
            .insert(FormKind::Waitlist, &signup("a@b.co"))
            .await
            .unwrap();
    }

    #[test]
    fn test_missing_supabase_credentials_fail_instead_of_memory() {
        let result = LeadStore::from_config(&store_config(None, StoreBackend::Supabase));

        match result {
            Err(StoreError::NotConfigured(msg)) => {
                assert!(msg.contains("SUPABASE_URL"));
                assert!(msg.contains("LEADS_STORE=memory"));
            }
            Err(other) => panic!("expected NotConfigured, got {:?}", other),
            Ok(store) => panic!("expected an error, got the {} store", store.backend_name()),
        }
    }

    #[test]
    fn test_configured_supabase_is_used() {
        let config = store_config(Some("https://x.supabase.co"), StoreBackend::Supabase);
        let store = LeadStore::from_config(&config).unwrap();
        assert_eq!(store.backend_name(), "supabase");
    }
}
