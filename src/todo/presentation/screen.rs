//! Line-oriented intent capture for the todo screen.

use super::{DialogStep, TodoDialog, TodoEvent, TodoUiState};
use crate::todo::domain::{Todo, TodoId};

/// Input that closes an open dialog without saving.
pub const CANCEL_COMMAND: &str = ":cancel";

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  add            open the add dialog
  edit <id>      open the edit dialog for a todo
  toggle <id>    flip a todo's completion
  delete <id>    delete a todo
  reload         reload the list
  dismiss        hide the current error
  help           show this help
  quit           leave
Inside a dialog, type :cancel to close it.";

/// What the caller should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Send this event to the view model.
    Emit(TodoEvent),
    /// Show this dialog prompt and wait for the next line.
    Prompt(String),
    /// Show this message; nothing else changes.
    Message(String),
    /// Redraw the current state.
    Render,
    /// Leave the screen.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenDialog {
    Add(TodoDialog),
    Edit { target: Todo, dialog: TodoDialog },
}

impl OpenDialog {
    fn dialog(&self) -> &TodoDialog {
        match self {
            Self::Add(dialog) | Self::Edit { dialog, .. } => dialog,
        }
    }
}

/// View-local selection state: which dialog, if any, is open.
///
/// Domain state lives in [`TodoUiState`]; the screen only reads it to
/// resolve ids typed by the user into full todo copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoScreen {
    dialog: Option<OpenDialog>,
}

impl TodoScreen {
    /// Creates a screen with no dialog open.
    #[must_use]
    pub const fn new() -> Self {
        Self { dialog: None }
    }

    /// Returns the open dialog, if any.
    #[must_use]
    pub fn open_dialog(&self) -> Option<&TodoDialog> {
        self.dialog.as_ref().map(OpenDialog::dialog)
    }

    /// Returns the prompt to show when a dialog is open.
    #[must_use]
    pub fn pending_prompt(&self) -> Option<String> {
        self.open_dialog()
            .map(|dialog| format!("{}\n{}", dialog.heading(), dialog.prompt()))
    }

    /// Interprets one line of input against the current state.
    pub fn handle_input(&mut self, line: &str, state: &TodoUiState) -> ScreenAction {
        if self.dialog.is_some() {
            return self.answer_dialog(line);
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return ScreenAction::Render;
        };
        let argument = words.next();

        match command {
            "add" => self.open(OpenDialog::Add(TodoDialog::new("Add New Todo"))),
            "edit" => match resolve(argument, state) {
                Ok(todo) => {
                    let dialog =
                        TodoDialog::prefilled("Edit Todo", todo.title(), todo.description());
                    self.open(OpenDialog::Edit {
                        target: todo.clone(),
                        dialog,
                    })
                }
                Err(message) => ScreenAction::Message(message),
            },
            "toggle" => match resolve(argument, state) {
                Ok(todo) => ScreenAction::Emit(TodoEvent::Update(todo.clone().toggled())),
                Err(message) => ScreenAction::Message(message),
            },
            "delete" => match parse_id(argument) {
                Ok(id) => ScreenAction::Emit(TodoEvent::Delete(id)),
                Err(message) => ScreenAction::Message(message),
            },
            "reload" => ScreenAction::Emit(TodoEvent::Reload),
            "dismiss" => ScreenAction::Emit(TodoEvent::DismissError),
            "help" => ScreenAction::Message(HELP_TEXT.to_owned()),
            "quit" | "exit" => ScreenAction::Quit,
            other => ScreenAction::Message(format!("Unknown command `{other}`; type `help`")),
        }
    }

    fn open(&mut self, dialog: OpenDialog) -> ScreenAction {
        self.dialog = Some(dialog);
        self.pending_prompt()
            .map_or(ScreenAction::Render, ScreenAction::Prompt)
    }

    fn answer_dialog(&mut self, line: &str) -> ScreenAction {
        if line.trim() == CANCEL_COMMAND {
            self.dialog = None;
            return ScreenAction::Render;
        }
        let Some(open) = self.dialog.as_mut() else {
            return ScreenAction::Render;
        };
        let dialog = match open {
            OpenDialog::Add(dialog) | OpenDialog::Edit { dialog, .. } => dialog,
        };

        match dialog.answer(line) {
            DialogStep::Prompt(prompt) => ScreenAction::Prompt(prompt),
            DialogStep::Rejected(reason) => {
                ScreenAction::Prompt(format!("{reason}\n{}", dialog.prompt()))
            }
            DialogStep::Confirmed(title, description) => match self.dialog.take() {
                Some(OpenDialog::Add(_)) => ScreenAction::Emit(TodoEvent::Add { title, description }),
                Some(OpenDialog::Edit { target, .. }) => ScreenAction::Emit(TodoEvent::Update(
                    target.with_title(title).with_description(description),
                )),
                None => ScreenAction::Render,
            },
        }
    }
}

fn parse_id(argument: Option<&str>) -> Result<TodoId, String> {
    let raw = argument.ok_or_else(|| "Missing todo id".to_owned())?;
    raw.trim_start_matches('#')
        .parse::<i64>()
        .ok()
        .and_then(|value| TodoId::new(value).ok())
        .ok_or_else(|| format!("`{raw}` is not a todo id"))
}

fn resolve<'a>(argument: Option<&str>, state: &'a TodoUiState) -> Result<&'a Todo, String> {
    let id = parse_id(argument)?;
    state
        .task(id)
        .ok_or_else(|| format!("No todo with id {id}"))
}
