//! Plain-text rendering of the todo screen.

use super::TodoUiState;
use crate::todo::domain::Todo;

/// Screen heading.
const HEADING: &str = "Todo App";

/// Renders [`TodoUiState`] snapshots as terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoView;

impl TodoView {
    /// Renders the full screen for `state`.
    #[must_use]
    pub fn render(self, state: &TodoUiState) -> String {
        let mut out = String::new();
        out.push_str(HEADING);
        out.push('\n');
        out.push_str(&"=".repeat(HEADING.len()));
        out.push('\n');

        if let Some(error) = &state.error {
            out.push_str(&format!("! {error} (type `dismiss` to hide)\n"));
        }

        if state.is_loading {
            out.push_str("Loading...\n");
        } else if state.tasks.is_empty() {
            out.push_str("No todos yet\n");
            out.push_str("Type `add` to create your first todo\n");
        } else {
            for todo in &state.tasks {
                render_row(&mut out, todo);
            }
        }
        out
    }
}

fn render_row(out: &mut String, todo: &Todo) {
    let mark = if todo.is_completed() { 'x' } else { ' ' };
    out.push_str(&format!("[{mark}] #{:<4} {}\n", todo.id().value(), todo.title()));
    if !todo.description().is_empty() {
        for line in todo.description().lines() {
            out.push_str(&format!("         {line}\n"));
        }
    }
}
