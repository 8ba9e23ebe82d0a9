//! Form feature state.

use enum_map::EnumMap;
use gatehouse_core::form::{Field, FormController};

use super::editor::FieldEditor;

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    SubmitButton,
    CancelButton,
}

impl Focus {
    /// Next element in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Focus::Field(Field::Username) => Focus::Field(Field::Password),
            Focus::Field(Field::Password) => Focus::Field(Field::ConfirmPassword),
            Focus::Field(Field::ConfirmPassword) => Focus::SubmitButton,
            Focus::SubmitButton => Focus::CancelButton,
            Focus::CancelButton => Focus::Field(Field::Username),
        }
    }

    /// Previous element in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Focus::Field(Field::Username) => Focus::CancelButton,
            Focus::Field(Field::Password) => Focus::Field(Field::Username),
            Focus::Field(Field::ConfirmPassword) => Focus::Field(Field::Password),
            Focus::SubmitButton => Focus::Field(Field::ConfirmPassword),
            Focus::CancelButton => Focus::SubmitButton,
        }
    }
}

/// Login form slice state.
///
/// The controller owns the field values; the editors mirror them for cursor
/// tracking. Every edit goes through [`FormController::set_field`] so the two
/// never drift.
pub struct FormUiState {
    /// Validation state machine; source of truth for values.
    pub controller: FormController,
    /// Per-field editors.
    pub editors: EnumMap<Field, FieldEditor>,
    /// Currently-focused element.
    pub focus: Focus,
}

impl Default for FormUiState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormUiState {
    /// Creates a pristine form focused on the username field.
    pub fn new() -> Self {
        Self {
            controller: FormController::new(),
            editors: EnumMap::default(),
            focus: Focus::Field(Field::Username),
        }
    }
}
