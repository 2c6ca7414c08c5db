//! Submission lifecycle shared by every lead form
//!
//! A form is either being edited, waiting on its single in-flight request,
//! done, or showing the error from its last attempt.

use serde::{Deserialize, Serialize};

use super::validation::FieldErrors;

/// Shown for every failure that isn't a duplicate entry
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error code the API uses for uniqueness violations
pub const DUPLICATE_ENTRY_CODE: &str = "DUPLICATE_ENTRY";

/// Error code the API uses for payloads that fail validation
pub const VALIDATION_FAILED_CODE: &str = "VALIDATION_FAILED";

/// Which of the three lead forms a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Waitlist,
    Assessment,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Waitlist, FormKind::Assessment, FormKind::Contact];

    /// Datastore table the records go to
    pub fn table(&self) -> &'static str {
        match self {
            FormKind::Waitlist => "waitlist_signups",
            FormKind::Assessment => "assessment_requests",
            FormKind::Contact => "contact_messages",
        }
    }

    /// Path of the API endpoint accepting this form
    pub fn api_path(&self) -> &'static str {
        match self {
            FormKind::Waitlist => "/api/leads/waitlist",
            FormKind::Assessment => "/api/leads/assessment",
            FormKind::Contact => "/api/leads/contact",
        }
    }

    /// Message shown when the store reports the record already exists
    pub fn duplicate_message(&self) -> &'static str {
        match self {
            FormKind::Waitlist => "This email is already on our waitlist!",
            FormKind::Assessment => "You already have a pending assessment request!",
            FormKind::Contact => "We already received this message. We'll be in touch soon!",
        }
    }

    /// Headline of the view that replaces the form once it went through
    pub fn success_title(&self) -> &'static str {
        match self {
            FormKind::Waitlist => "Welcome to the future",
            FormKind::Assessment => "Assessment request received",
            FormKind::Contact => "Message sent successfully",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Waitlist => {
                "You're now part of the agentic optimization revolution. \
                 Expect beta access and exclusive insights within 48 hours."
            }
            FormKind::Assessment => {
                "Your website assessment request has been submitted successfully. \
                 I'll personally review your site and provide detailed insights within 24-48 hours."
            }
            FormKind::Contact => {
                "Thank you for reaching out! We'll get back to you within 24 hours."
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Waitlist => "waitlist signup",
            FormKind::Assessment => "assessment request",
            FormKind::Contact => "contact message",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why a submission didn't go through
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// The store already holds this record
    Duplicate,
    /// The server refused the payload during validation
    Rejected(FieldErrors),
    /// The server answered with any other error
    Server(String),
    /// The request never got an answer
    Network(String),
}

impl SubmitFailure {
    /// The single line shown to the user for this failure
    pub fn user_message(&self, kind: FormKind) -> &'static str {
        match self {
            SubmitFailure::Duplicate => kind.duplicate_message(),
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl std::fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitFailure::Duplicate => write!(f, "duplicate entry"),
            SubmitFailure::Rejected(errors) => {
                write!(f, "rejected fields: ")?;
                let fields: Vec<&str> = errors.fields().collect();
                write!(f, "{}", fields.join(", "))
            }
            SubmitFailure::Server(msg) => write!(f, "server error: {}", msg),
            SubmitFailure::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

/// JSON error body returned by the lead endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub fields: FieldErrors,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: FieldErrors::new(),
        }
    }

    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = fields;
        self
    }

    /// Turn a decoded error body back into a client-side failure
    pub fn into_failure(self) -> SubmitFailure {
        match self.code.as_str() {
            DUPLICATE_ENTRY_CODE => SubmitFailure::Duplicate,
            VALIDATION_FAILED_CODE => SubmitFailure::Rejected(self.fields),
            _ => SubmitFailure::Server(self.error),
        }
    }
}

/// Per-form submission state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormPhase {
    /// Accepting input
    #[default]
    Editing,
    /// A request is in flight; the submit control is disabled
    Submitting,
    /// Terminal: the record was stored
    Submitted,
    /// Last attempt failed; holds the message to show
    Failed(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormPhase::Submitted)
    }

    /// Inputs are locked while submitting and after success
    pub fn is_locked(&self) -> bool {
        matches!(self, FormPhase::Submitting | FormPhase::Submitted)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter `Submitting`. Returns false if a request is already in flight or
    /// the form is done, in which case nothing changes.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            FormPhase::Editing | FormPhase::Failed(_) => {
                *self = FormPhase::Submitting;
                true
            }
            FormPhase::Submitting | FormPhase::Submitted => false,
        }
    }

    /// Apply the outcome of the in-flight request. Ignored unless submitting.
    pub fn finish(&mut self, kind: FormKind, outcome: Result<(), SubmitFailure>) {
        if !self.is_submitting() {
            return;
        }
        *self = match outcome {
            Ok(()) => FormPhase::Submitted,
            Err(failure) => FormPhase::Failed(failure.user_message(kind).to_string()),
        };
    }

    /// The user changed a field: a stale submit error goes away
    pub fn note_edit(&mut self) {
        if matches!(self, FormPhase::Failed(_)) {
            *self = FormPhase::Editing;
        }
    }

    pub fn reset(&mut self) {
        *self = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut phase = FormPhase::default();
        assert!(phase.begin_submit());
        assert!(phase.is_submitting());

        phase.finish(FormKind::Waitlist, Ok(()));
        assert!(phase.is_submitted());
        assert!(phase.is_locked());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut phase = FormPhase::default();
        assert!(phase.begin_submit());
        assert!(!phase.begin_submit());
        assert_eq!(phase, FormPhase::Submitting);
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut phase = FormPhase::Submitted;

        assert!(!phase.begin_submit());
        phase.note_edit();
        phase.finish(FormKind::Contact, Err(SubmitFailure::Duplicate));

        assert_eq!(phase, FormPhase::Submitted);
    }

    #[test]
    fn test_duplicate_maps_to_form_specific_message() {
        let mut phase = FormPhase::Submitting;
        phase.finish(FormKind::Waitlist, Err(SubmitFailure::Duplicate));
        assert_eq!(
            phase.error_message(),
            Some("This email is already on our waitlist!")
        );

        let mut phase = FormPhase::Submitting;
        phase.finish(FormKind::Assessment, Err(SubmitFailure::Duplicate));
        assert_eq!(
            phase.error_message(),
            Some("You already have a pending assessment request!")
        );
    }

    #[test]
    fn test_other_failures_are_generic() {
        let failures = [
            SubmitFailure::Network("connection refused".to_string()),
            SubmitFailure::Server("boom".to_string()),
            SubmitFailure::Rejected(FieldErrors::new()),
        ];

        for failure in failures {
            for kind in FormKind::ALL {
                let mut phase = FormPhase::Submitting;
                phase.finish(kind, Err(failure.clone()));
                assert_eq!(phase.error_message(), Some(GENERIC_FAILURE_MESSAGE));
            }
        }
    }

    #[test]
    fn test_failed_allows_resubmit_and_clears_on_edit() {
        let mut phase = FormPhase::Failed(GENERIC_FAILURE_MESSAGE.to_string());
        phase.note_edit();
        assert_eq!(phase, FormPhase::Editing);

        let mut phase = FormPhase::Failed(GENERIC_FAILURE_MESSAGE.to_string());
        assert!(phase.begin_submit());
        assert!(phase.error_message().is_none());
    }

    #[test]
    fn test_finish_outside_submitting_is_ignored() {
        let mut phase = FormPhase::Editing;
        phase.finish(FormKind::Waitlist, Ok(()));
        assert_eq!(phase, FormPhase::Editing);
    }

    #[test]
    fn test_reset() {
        let mut phase = FormPhase::Submitted;
        phase.reset();
        assert_eq!(phase, FormPhase::Editing);
    }

    #[test]
    fn test_error_body_into_failure() {
        let body = ApiErrorBody::new("exists", DUPLICATE_ENTRY_CODE);
        assert_eq!(body.into_failure(), SubmitFailure::Duplicate);

        let mut fields = FieldErrors::new();
        fields.insert("email", "Email is required");
        let body = ApiErrorBody::new("invalid", VALIDATION_FAILED_CODE).with_fields(fields.clone());
        assert_eq!(body.into_failure(), SubmitFailure::Rejected(fields));

        let body = ApiErrorBody::new("upstream down", "STORE_UNAVAILABLE");
        assert_eq!(
            body.into_failure(),
            SubmitFailure::Server("upstream down".to_string())
        );
    }

    #[test]
    fn test_error_body_json_shape() {
        let json = serde_json::to_value(ApiErrorBody::new("exists", DUPLICATE_ENTRY_CODE)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "exists", "code": "DUPLICATE_ENTRY" })
        );

        let decoded: ApiErrorBody =
            serde_json::from_str(r#"{"error":"x","code":"VALIDATION_FAILED","fields":{"email":"Email is required"}}"#)
                .unwrap();
        assert_eq!(decoded.fields.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_kind_routing() {
        assert_eq!(FormKind::Waitlist.table(), "waitlist_signups");
        assert_eq!(FormKind::Assessment.api_path(), "/api/leads/assessment");
        assert_eq!(FormKind::Contact.to_string(), "contact message");
    }

    #[test]
    fn test_every_kind_has_its_own_copy() {
        for kind in FormKind::ALL {
            assert!(!kind.success_title().is_empty());
            assert!(!kind.success_message().is_empty());
        }
        assert_ne!(
            FormKind::Waitlist.duplicate_message(),
            FormKind::Contact.duplicate_message()
        );
    }
}
