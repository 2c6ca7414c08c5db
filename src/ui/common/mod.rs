//! Common reusable UI components
//!
//! Form fields, messages, spinners and the modal shell shared by the lead
//! forms on the landing page.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, SuccessPanel};
pub use modal::BaseModal;
pub use spinner::{InlineSpinner, SubmitButton};
