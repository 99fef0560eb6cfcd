//! Form Controller Module
//!
//! Tracks field values, touched state, validation errors, and the submission
//! lifecycle for a structured record of string fields.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::pin::Pin;

use tracing::error;

// == Field Records ==
/// Field name → current value.
pub type FieldValues = BTreeMap<String, String>;
/// Field name → human-readable error message.
pub type FieldErrors = BTreeMap<String, String>;

type ValidateFn = Box<dyn Fn(&FieldValues) -> FieldErrors + Send + Sync>;
type SubmitFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;
type SubmitFn = Box<dyn Fn(FieldValues) -> SubmitFuture + Send + Sync>;

// == Form Controller ==
/// State machine for one form.
///
/// `errors` always holds the result of the last validation pass. Validation
/// runs on blur, on submit, and on change of a field that was already
/// touched. It deliberately does not run on every keystroke of an untouched
/// field, so errors are not shown before the user has finished a field. As a
/// consequence [`is_valid`](Self::is_valid) reflects the last computed pass,
/// not necessarily the current uncommitted values.
pub struct FormController {
    /// Values the form was initialized with, restored on reset
    initial_values: FieldValues,
    /// Current field values
    values: FieldValues,
    /// Result of the last validation pass
    errors: FieldErrors,
    /// Fields that have lost focus at least once (or were submit-touched)
    touched: BTreeSet<String>,
    /// Whether a submit handler is currently running
    submitting: bool,
    /// Validation function over the full value record
    validate: ValidateFn,
    /// Submit handler invoked with a snapshot of the values
    on_submit: SubmitFn,
}

impl FormController {
    // == Constructor ==
    /// Creates a controller from default values, a validation function, and
    /// an async submit handler.
    pub fn new<V, S, Fut>(initial_values: FieldValues, validate: V, on_submit: S) -> Self
    where
        V: Fn(&FieldValues) -> FieldErrors + Send + Sync + 'static,
        S: Fn(FieldValues) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            values: initial_values.clone(),
            initial_values,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submitting: false,
            validate: Box::new(validate),
            on_submit: Box::new(move |values| Box::pin(on_submit(values))),
        }
    }

    // == Handle Change ==
    /// Updates a field's value.
    ///
    /// Re-runs validation only if the field has previously been touched.
    pub fn handle_change(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        if self.touched.contains(field) {
            self.run_validation();
        }
    }

    // == Set Field Value ==
    /// Sets a field programmatically, with the same touched-gated
    /// revalidation as [`handle_change`](Self::handle_change).
    pub fn set_field_value(&mut self, field: &str, value: impl Into<String>) {
        self.handle_change(field, value);
    }

    // == Handle Blur ==
    /// Marks a field touched and re-runs validation unconditionally.
    pub fn handle_blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.run_validation();
    }

    // == Handle Submit ==
    /// Runs the submission lifecycle.
    ///
    /// Marks every field touched and validates; with zero errors, sets the
    /// submitting flag, invokes the handler once (awaited), and clears the
    /// flag whether the handler succeeds or fails. A handler error is logged
    /// and swallowed. Overlapping submits are not guarded here; disable the
    /// submit control instead.
    pub async fn handle_submit(&mut self) {
        let fields: Vec<String> = self.values.keys().cloned().collect();
        self.touched.extend(fields);

        self.run_validation();
        if !self.errors.is_empty() {
            return;
        }

        self.submitting = true;
        let outcome = (self.on_submit)(self.values.clone()).await;
        if let Err(submit_error) = outcome {
            error!(%submit_error, "form submission failed");
        }
        self.submitting = false;
    }

    // == Reset ==
    /// Restores initial values and clears errors, touched state, and the
    /// submitting flag.
    pub fn reset(&mut self) {
        self.values = self.initial_values.clone();
        self.errors.clear();
        self.touched.clear();
        self.submitting = false;
    }

    // == Accessors ==
    /// Current field values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current value of one field, if present.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Errors from the last validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for one field, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// True exactly when the last validation pass produced zero errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether a submit handler is currently running.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn run_validation(&mut self) {
        self.errors = (self.validate)(&self.values);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn login_values() -> FieldValues {
        FieldValues::from([
            ("email".to_string(), String::new()),
            ("password".to_string(), String::new()),
        ])
    }

    fn login_validate(values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if values.get("email").map_or(true, |v| v.is_empty()) {
            errors.insert("email".to_string(), "Email is required".to_string());
        }
        if values.get("password").map_or(true, |v| v.is_empty()) {
            errors.insert("password".to_string(), "Password is required".to_string());
        }
        errors
    }

    fn controller_with_counter() -> (FormController, Arc<AtomicUsize>) {
        let submits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&submits);
        let controller = FormController::new(login_values(), login_validate, move |_values| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });
        (controller, submits)
    }

    #[test]
    fn test_change_on_untouched_field_skips_validation() {
        let (mut form, _) = controller_with_counter();

        form.handle_change("email", "");

        // No validation pass has run; the empty email shows no error yet
        assert!(form.errors().is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_blur_marks_touched_and_validates() {
        let (mut form, _) = controller_with_counter();

        form.handle_blur("email");

        assert!(form.is_touched("email"));
        assert_eq!(form.error("email"), Some("Email is required"));
        assert!(!form.is_valid());
    }

    #[test]
    fn test_change_on_touched_field_revalidates() {
        let (mut form, _) = controller_with_counter();

        form.handle_blur("email");
        assert!(form.error("email").is_some());

        form.handle_change("email", "user@example.com");
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_is_valid_lags_behind_untouched_edits() {
        let (mut form, _) = controller_with_counter();

        form.handle_blur("email");
        form.handle_change("email", "user@example.com");
        assert!(form.is_valid());

        // Password is still empty and untouched; clearing email through an
        // untouched path would not re-run validation either. The lag is the
        // documented contract, not a bug.
        form.handle_change("password", "");
        assert!(form.is_valid());
    }

    #[tokio::test]
    async fn test_submit_with_errors_never_invokes_handler() {
        let (mut form, submits) = controller_with_counter();

        form.handle_submit().await;

        assert_eq!(submits.load(Ordering::SeqCst), 0);
        assert!(form.is_touched("email"));
        assert!(form.is_touched("password"));
        assert_eq!(form.errors().len(), 2);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_with_valid_values_invokes_handler_once() {
        let (mut form, submits) = controller_with_counter();

        form.handle_change("email", "user@example.com");
        form.handle_change("password", "hunter22");
        form.handle_submit().await;

        assert_eq!(submits.load(Ordering::SeqCst), 1);
        assert!(form.is_valid());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submitting_cleared_when_handler_errors() {
        let submits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&submits);
        let mut form = FormController::new(
            FieldValues::from([("name".to_string(), "ada".to_string())]),
            |_| FieldErrors::new(),
            move |_values| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    anyhow::bail!("backend rejected the record")
                }
            },
        );

        form.handle_submit().await;

        // The error is logged, not surfaced, and the flag is cleared
        assert_eq!(submits.load(Ordering::SeqCst), 1);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_marks_all_fields_touched() {
        let (mut form, _) = controller_with_counter();

        form.handle_submit().await;

        // Subsequent edits now revalidate immediately
        form.handle_change("email", "user@example.com");
        form.handle_change("password", "hunter22");
        assert!(form.is_valid());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let (mut form, _) = controller_with_counter();

        form.handle_change("email", "user@example.com");
        form.handle_blur("password");
        assert!(!form.errors().is_empty());

        form.reset();

        assert_eq!(form.values(), &login_values());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched("password"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_set_field_value_matches_change_semantics() {
        let (mut form, _) = controller_with_counter();

        form.set_field_value("email", "a@b.co");
        assert!(form.errors().is_empty(), "untouched field skips validation");

        form.handle_blur("email");
        form.set_field_value("email", "");
        assert_eq!(form.error("email"), Some("Email is required"));
    }
}
