//! Validation for the three lead forms
//!
//! The same rules run in the browser before any request is made and again in
//! the API handlers before anything reaches the store.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use super::submission::FormKind;

/// Minimum length of a contact message, in characters
pub const MESSAGE_MIN_CHARS: usize = 10;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot in the domain
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex compile"));

/// Check an email address against the permissive `local@domain.tld` pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Prepend `https://` to inputs that don't already start with `http`
pub fn normalize_website(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Whether the normalized form of `input` parses as an absolute URL
pub fn is_valid_website(input: &str) -> bool {
    Url::parse(&normalize_website(input)).is_ok()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Field name to error message, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop the error for `field`, returning whether there was one
    pub fn remove(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn into_result<T>(self, payload: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(payload) } else { Err(self) }
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if is_blank(email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email");
    }
}

fn check_persona(persona: &str, errors: &mut FieldErrors) {
    if is_blank(persona) {
        errors.insert("persona", "Please select what describes you");
    }
}

/// A form's raw text fields together with the rules that turn them into a
/// store payload.
///
/// The raw form is also the request body of the matching API endpoint, so the
/// server can run exactly the same checks.
pub trait LeadForm:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The record handed to the store after successful validation
    type Payload: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    const KIND: FormKind;

    /// Check every field, returning the normalized payload or all field errors
    fn validate(&self) -> Result<Self::Payload, FieldErrors>;

    /// Read a single field by name
    fn field(&self, field: &str) -> Option<&str>;

    /// Update a single field by name; unknown names are ignored
    fn set_field(&mut self, field: &str, value: String);
}

/// Waitlist form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistForm {
    pub email: String,
    pub persona: String,
    pub website: String,
}

/// Row written to `waitlist_signups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistSignup {
    pub email: String,
    pub persona: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl LeadForm for WaitlistForm {
    type Payload = WaitlistSignup;

    const KIND: FormKind = FormKind::Waitlist;

    fn validate(&self) -> Result<WaitlistSignup, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);
        check_persona(&self.persona, &mut errors);

        // Optional, but if given it has to be usable
        let website = if is_blank(&self.website) {
            None
        } else if is_valid_website(&self.website) {
            Some(normalize_website(&self.website))
        } else {
            errors.insert("website", "Please enter a valid website URL");
            None
        };

        errors.into_result(WaitlistSignup {
            email: self.email.clone(),
            persona: self.persona.clone(),
            website,
        })
    }

    fn field(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "persona" => Some(&self.persona),
            "website" => Some(&self.website),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "email" => self.email = value,
            "persona" => self.persona = value,
            "website" => self.website = value,
            _ => {}
        }
    }
}

/// Assessment request form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentForm {
    pub email: String,
    pub website: String,
    pub persona: String,
}

/// Row written to `assessment_requests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub email: String,
    pub website: String,
    pub persona: String,
}

impl LeadForm for AssessmentForm {
    type Payload = AssessmentRequest;

    const KIND: FormKind = FormKind::Assessment;

    fn validate(&self) -> Result<AssessmentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);

        if is_blank(&self.website) {
            errors.insert("website", "Website URL is required");
        } else if !is_valid_website(&self.website) {
            errors.insert("website", "Please enter a valid website URL");
        }

        check_persona(&self.persona, &mut errors);

        errors.into_result(AssessmentRequest {
            email: self.email.clone(),
            website: normalize_website(&self.website),
            persona: self.persona.clone(),
        })
    }

    fn field(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "website" => Some(&self.website),
            "persona" => Some(&self.persona),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "email" => self.email = value,
            "website" => self.website = value,
            "persona" => self.persona = value,
            _ => {}
        }
    }
}

/// Contact form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Row written to `contact_messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl LeadForm for ContactForm {
    type Payload = ContactMessage;

    const KIND: FormKind = FormKind::Contact;

    fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);

        if is_blank(&self.subject) {
            errors.insert("subject", "Subject is required");
        }

        if is_blank(&self.message) {
            errors.insert("message", "Message is required");
        } else if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.insert(
                "message",
                format!("Message must be at least {} characters", MESSAGE_MIN_CHARS),
            );
        }

        errors.into_result(ContactMessage {
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    fn field(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            _ => {}
        }
    }
}

/// Persona choices offered by the select fields, as `(value, label)` pairs.
///
/// The store treats persona as an opaque string; these lists only drive the UI.
pub mod personas {
    pub const WAITLIST: &[(&str, &str)] = &[
        ("agency", "Agency owner/director"),
        ("ecommerce", "E-commerce marketing manager"),
        ("saas", "SaaS marketing lead"),
        ("consultant", "Performance marketing consultant"),
        ("other", "Other"),
    ];

    pub const ASSESSMENT: &[(&str, &str)] = &[
        ("business_owner", "Business owner"),
        ("marketing_manager", "Marketing manager"),
        ("designer", "Designer/Developer"),
        ("agency", "Agency owner/director"),
        ("consultant", "Consultant"),
        ("other", "Other"),
    ];
}
