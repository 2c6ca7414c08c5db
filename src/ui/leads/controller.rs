//! Reactive state for a single lead form instance
//!
//! Validate, then submit asynchronously, parameterized by the form's field
//! schema (`LeadForm`). The phase signal is the only source of truth for
//! busy/submitted/failed.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::submit_lead;
use crate::core::leads::{FieldErrors, FormPhase, LeadForm, SubmitFailure};

/// Signals backing one form instance
pub struct LeadFormController<F: LeadForm> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
    pub phase: RwSignal<FormPhase>,
    /// Bumped by every submit and reset; a response only lands if it still matches
    attempt: RwSignal<u64>,
}

impl<F: LeadForm> Clone for LeadFormController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: LeadForm> Copy for LeadFormController<F> {}

impl<F: LeadForm> Default for LeadFormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: LeadForm> LeadFormController<F> {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(F::default()),
            errors: RwSignal::new(FieldErrors::new()),
            phase: RwSignal::new(FormPhase::Editing),
            attempt: RwSignal::new(0),
        }
    }

    /// Current value of one field
    pub fn value(&self, field: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.field(field).unwrap_or_default().to_string()))
    }

    /// Validation error for one field, if any
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// The single submit-level error line
    pub fn submit_error(&self) -> Signal<Option<String>> {
        let phase = self.phase;
        Signal::derive(move || phase.with(|p| p.error_message().map(str::to_string)))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(FormPhase::is_submitting))
    }

    pub fn is_locked(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(FormPhase::is_locked))
    }

    pub fn is_submitted(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(FormPhase::is_submitted))
    }

    /// Input handler for one field
    pub fn on_input(&self, field: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |value| this.set_field(field, value))
    }

    /// Store a new value, dropping that field's error and any stale submit error
    pub fn set_field(&self, field: &str, value: String) {
        if self.phase.with_untracked(FormPhase::is_locked) {
            return;
        }

        self.form.update(|f| f.set_field(field, value));
        if self.errors.with_untracked(|e| e.get(field).is_some()) {
            self.errors.update(|e| {
                e.remove(field);
            });
        }
        if self.phase.with_untracked(|p| p.error_message().is_some()) {
            self.phase.update(FormPhase::note_edit);
        }
    }

    /// Validate and, if clean, send the payload. Returns whether a request was started.
    pub fn submit(&self) -> bool {
        let Some((attempt, payload)) = self.begin() else {
            return false;
        };

        let this = *self;
        spawn_local(async move {
            let outcome = submit_lead(F::KIND, &payload).await;
            this.complete(attempt, outcome);
        });

        true
    }

    /// Validate and enter `Submitting`, returning the attempt number and the
    /// payload to send
    fn begin(&self) -> Option<(u64, F::Payload)> {
        let payload = match self.form.with_untracked(F::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return None;
            }
        };
        self.errors.set(FieldErrors::new());

        let mut started = false;
        self.phase.update(|p| started = p.begin_submit());
        if !started {
            return None;
        }

        Some((self.next_attempt(), payload))
    }

    /// Apply a response. Dropped if the form was reset or resubmitted since
    /// `attempt` started, or if the component is gone.
    fn complete(&self, attempt: u64, outcome: Result<(), SubmitFailure>) {
        let kind = F::KIND;

        if let Err(failure) = &outcome {
            warn!("{} failed: {}", kind, failure);
        }

        if self.attempt.try_get_untracked() != Some(attempt) {
            return;
        }

        if let Err(SubmitFailure::Rejected(fields)) = &outcome {
            self.errors.try_set(fields.clone());
        }
        self.phase.try_update(|p| p.finish(kind, outcome));
    }

    fn next_attempt(&self) -> u64 {
        self.attempt.update(|n| *n += 1);
        self.attempt.get_untracked()
    }

    /// Back to an empty, editable form
    pub fn reset(&self) {
        self.form.set(F::default());
        self.errors.set(FieldErrors::new());
        self.phase.update(FormPhase::reset);
        self.next_attempt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leads::{ContactForm, FormKind, GENERIC_FAILURE_MESSAGE, WaitlistForm};

    #[test]
    fn test_invalid_submit_sets_errors_without_request() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<ContactForm>::new();
        ctrl.set_field("email", "me@example.com".to_string());
        ctrl.set_field("message", "too short".to_string());

        assert!(!ctrl.submit());

        let errors = ctrl.errors.get_untracked();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["message", "subject"]);
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Editing);
    }

    #[test]
    fn test_edit_clears_field_error_and_submit_error() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        assert!(!ctrl.submit());
        assert!(ctrl.errors.with_untracked(|e| e.get("email").is_some()));

        ctrl.phase
            .set(FormPhase::Failed(GENERIC_FAILURE_MESSAGE.to_string()));
        ctrl.set_field("email", "lead@example.com".to_string());

        assert!(ctrl.errors.with_untracked(|e| e.get("email").is_none()));
        assert!(ctrl.errors.with_untracked(|e| e.get("persona").is_some()));
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Editing);
        assert_eq!(ctrl.form.with_untracked(|f| f.email.clone()), "lead@example.com");
    }

    #[test]
    fn test_submitted_form_ignores_edits_and_submits() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        ctrl.set_field("email", "lead@example.com".to_string());
        ctrl.set_field("persona", "agency".to_string());
        ctrl.phase.set(FormPhase::Submitted);

        ctrl.set_field("email", "other@example.com".to_string());
        assert!(!ctrl.submit());

        assert_eq!(ctrl.form.with_untracked(|f| f.email.clone()), "lead@example.com");
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Submitted);
    }

    #[test]
    fn test_in_flight_form_refuses_second_submit() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        ctrl.form.set(WaitlistForm {
            email: "lead@example.com".to_string(),
            persona: "agency".to_string(),
            website: String::new(),
        });
        ctrl.phase.set(FormPhase::Submitting);

        assert!(!ctrl.submit());
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Submitting);
    }

    #[test]
    fn test_reset() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        ctrl.set_field("email", "lead@example.com".to_string());
        ctrl.phase.set(FormPhase::Submitted);

        ctrl.reset();

        assert_eq!(ctrl.form.get_untracked(), WaitlistForm::default());
        assert!(ctrl.errors.with_untracked(FieldErrors::is_empty));
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Editing);
    }

    fn filled_waitlist(ctrl: &LeadFormController<WaitlistForm>, email: &str) {
        ctrl.set_field("email", email.to_string());
        ctrl.set_field("persona", "agency".to_string());
    }

    #[test]
    fn test_response_completes_its_own_attempt() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        filled_waitlist(&ctrl, "lead@example.com");

        let (attempt, payload) = ctrl.begin().unwrap();
        assert_eq!(payload.email, "lead@example.com");
        assert!(ctrl.is_locked().get_untracked());

        ctrl.complete(attempt, Ok(()));
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Submitted);
    }

    #[test]
    fn test_failed_response_reports_and_unlocks() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        filled_waitlist(&ctrl, "lead@example.com");

        let (attempt, _) = ctrl.begin().unwrap();
        ctrl.complete(attempt, Err(SubmitFailure::Duplicate));

        assert_eq!(
            ctrl.submit_error().get_untracked().as_deref(),
            Some(FormKind::Waitlist.duplicate_message())
        );
        assert!(!ctrl.is_locked().get_untracked());
    }

    #[test]
    fn test_rejected_response_sets_field_errors() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        filled_waitlist(&ctrl, "lead@example.com");
        let (attempt, _) = ctrl.begin().unwrap();

        let mut fields = FieldErrors::new();
        fields.insert("email", "Please enter a valid email");
        ctrl.complete(attempt, Err(SubmitFailure::Rejected(fields)));

        assert_eq!(
            ctrl.error("email").get_untracked().as_deref(),
            Some("Please enter a valid email")
        );
        assert_eq!(
            ctrl.submit_error().get_untracked().as_deref(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
    }

    #[test]
    fn test_stale_response_after_reset_and_resubmit_is_dropped() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        filled_waitlist(&ctrl, "first@example.com");
        let (first, _) = ctrl.begin().unwrap();

        // Modal closed while the first request is out, then reopened and resubmitted
        ctrl.reset();
        filled_waitlist(&ctrl, "second@example.com");
        let (second, payload) = ctrl.begin().unwrap();
        assert_ne!(first, second);
        assert_eq!(payload.email, "second@example.com");

        ctrl.complete(first, Err(SubmitFailure::Duplicate));
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Submitting);
        assert!(ctrl.is_busy().get_untracked());
        assert!(!ctrl.submit());

        ctrl.complete(second, Ok(()));
        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Submitted);
    }

    #[test]
    fn test_response_after_reset_leaves_fresh_form_alone() {
        let _owner = Owner::new();
        _owner.set();
        let ctrl = LeadFormController::<WaitlistForm>::new();
        filled_waitlist(&ctrl, "lead@example.com");
        let (attempt, _) = ctrl.begin().unwrap();

        ctrl.reset();
        let mut fields = FieldErrors::new();
        fields.insert("email", "Please enter a valid email");
        ctrl.complete(attempt, Err(SubmitFailure::Rejected(fields)));

        assert_eq!(ctrl.phase.get_untracked(), FormPhase::Editing);
        assert!(ctrl.errors.with_untracked(FieldErrors::is_empty));
    }
}
