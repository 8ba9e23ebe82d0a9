//! Login form state machine.
//!
//! `FormController` owns all mutable form state and exposes the three
//! operations the presentation layer invokes: [`FormController::set_field`],
//! [`FormController::submit`], and [`FormController::cancel`].
//!
//! Validation outcomes are data ([`FieldErrors`]), never error returns:
//! every "failure" here is a user-correctable input state that the view
//! renders inline.
//!
//! ## Submitted flag
//!
//! The `submitted` flag forms a two-state machine:
//! - `Pristine` (initial): edits store the value and run no validation.
//! - `Active` (after the first submit): every edit re-validates immediately,
//!   so inline errors always reflect the current values.
//!
//! `cancel` returns to `Pristine` unconditionally.

use enum_map::{Enum, EnumMap};

/// Minimum password length (in chars) accepted at submit time.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// A form field identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order.
    pub fn all() -> [Field; 3] {
        [Field::Username, Field::Password, Field::ConfirmPassword]
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field's value renders masked.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// Per-field validation errors.
///
/// Entries are present only for currently-failing fields and are recomputed
/// wholesale on every validation pass, never merged incrementally. Messages
/// are fixed per rule, hence `&'static str`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    map: EnumMap<Field, Option<&'static str>>,
}

impl FieldErrors {
    /// Returns the message for a failing field, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.map[field]
    }

    /// True when no field is failing.
    pub fn is_empty(&self) -> bool {
        self.map.values().all(Option::is_none)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.map.values().filter(|slot| slot.is_some()).count()
    }

    fn set(&mut self, field: Field, message: &'static str) {
        self.map[field] = Some(message);
    }
}

/// The complete form state, owned exclusively by [`FormController`].
///
/// Lifetime is one form session: created empty, mutated only through the
/// controller's operations, reset to initial on cancel.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    /// Errors from the most recent validation pass.
    pub errors: FieldErrors,
    /// True after the first submit attempt; edits re-validate while set.
    pub submitted: bool,
    /// Greeting set by a fully-successful submit.
    pub message: Option<String>,
}

impl FormState {
    /// Returns the current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

/// Validates the current field values, producing a fresh errors mapping.
///
/// Fields are evaluated independently; each field's rules short-circuit at
/// the first failing condition. Fields with no error are absent from the
/// mapping.
pub fn validate(state: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if state.username.is_empty() {
        errors.set(Field::Username, "Username is required.");
    }

    if state.password.is_empty() {
        errors.set(Field::Password, "Password is required.");
    } else if state.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.set(Field::Password, "Password must be at least 6 characters.");
    }

    if state.confirm_password.is_empty() {
        errors.set(Field::ConfirmPassword, "Please confirm your password.");
    } else if state.confirm_password != state.password {
        errors.set(Field::ConfirmPassword, "Passwords do not match.");
    }

    errors
}

/// Owns [`FormState`] and applies the three user operations.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for the presentation layer.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Stores `value` verbatim (no trimming, no length cap).
    ///
    /// Re-validates immediately once a submit has happened, so inline errors
    /// track edits. The success message is only ever touched by `submit` and
    /// `cancel`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Username => self.state.username = value,
            Field::Password => self.state.password = value,
            Field::ConfirmPassword => self.state.confirm_password = value,
        }
        if self.state.submitted {
            self.state.errors = validate(&self.state);
        }
    }

    /// Runs a validation pass over the current values and records the
    /// outcome. Idempotent for unchanged fields.
    pub fn submit(&mut self) {
        self.state.errors = validate(&self.state);
        self.state.submitted = true;
        if self.state.errors.is_empty() {
            self.state.message = Some(format!("Welcome, {}!", self.state.username));
        } else {
            self.state.message = None;
        }
        tracing::debug!(failing = self.state.errors.len(), "submit");
    }

    /// Resets to the initial state. Unconditional; no validation run.
    pub fn cancel(&mut self) {
        self.state = FormState::default();
        tracing::debug!("form reset");
    }
}
