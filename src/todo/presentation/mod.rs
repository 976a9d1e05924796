//! Presentation layer: state container, rendering and intent capture.
//!
//! [`TodoViewModel`] owns the observable [`TodoUiState`] and applies
//! [`TodoEvent`]s. [`TodoView`] renders state as text, and [`TodoScreen`]
//! turns typed lines into events through [`TodoDialog`]s.

mod dialog;
mod screen;
mod state;
mod view;
mod view_model;

pub use dialog::{CLEAR_ANSWER, DialogField, DialogStep, TodoDialog};
pub use screen::{CANCEL_COMMAND, HELP_TEXT, ScreenAction, TodoScreen};
pub use state::{TodoEvent, TodoUiState};
pub use view::TodoView;
pub use view_model::TodoViewModel;
