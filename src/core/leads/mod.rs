//! Lead capture: waitlist signups, assessment requests and contact messages.

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod store;
mod submission;
mod validation;

pub use submission::{
    ApiErrorBody, DUPLICATE_ENTRY_CODE, FormKind, FormPhase, GENERIC_FAILURE_MESSAGE,
    SubmitFailure, VALIDATION_FAILED_CODE,
};
pub use validation::{
    AssessmentForm, AssessmentRequest, ContactForm, ContactMessage, FieldErrors, LeadForm,
    MESSAGE_MIN_CHARS, WaitlistForm, WaitlistSignup, is_valid_email, is_valid_website,
    normalize_website,
};
pub use validation::personas;
