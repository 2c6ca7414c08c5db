//! Lead capture forms
//!
//! One generic controller drives all three forms; the components only differ
//! in their fields and copy.

mod assessment;
mod client;
mod contact;
mod controller;
mod waitlist;

pub use assessment::AssessmentRequestForm;
pub use client::submit_lead;
pub use contact::ContactModal;
pub use controller::LeadFormController;
pub use waitlist::WaitlistSignupForm;
