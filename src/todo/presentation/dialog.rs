//! Add/edit dialog for the terminal view.

/// Description answer that empties a prefilled description.
pub const CLEAR_ANSWER: &str = "-";

/// Field the dialog is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    /// The todo title.
    Title,
    /// The optional description.
    Description,
}

/// Outcome of feeding one answer into a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStep {
    /// Ask the next question.
    Prompt(String),
    /// The answer was refused; ask the same question again.
    Rejected(String),
    /// All fields are filled in: `(title, description)`.
    Confirmed(String, String),
}

/// Two-field modal dialog collecting a title and a description.
///
/// Prefilled values are shown in the prompt and kept when the answer is
/// blank; answering [`CLEAR_ANSWER`] empties the description. Answers are
/// confirmed with surrounding whitespace trimmed. The dialog
/// cannot be saved while the title is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDialog {
    heading: String,
    title: String,
    description: String,
    field: DialogField,
}

impl TodoDialog {
    /// Opens an empty dialog under the given heading.
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self::prefilled(heading, "", "")
    }

    /// Opens a dialog with initial values.
    #[must_use]
    pub fn prefilled(
        heading: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            title: title.into(),
            description: description.into(),
            field: DialogField::Title,
        }
    }

    /// Returns the dialog heading.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the field awaiting an answer.
    #[must_use]
    pub const fn field(&self) -> DialogField {
        self.field
    }

    /// Returns `true` when the dialog may be saved.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Returns the prompt for the current field.
    #[must_use]
    pub fn prompt(&self) -> String {
        let (label, current) = match self.field {
            DialogField::Title => ("Title", &self.title),
            DialogField::Description => ("Description (optional)", &self.description),
        };
        if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        }
    }

    /// Feeds one answer into the dialog.
    pub fn answer(&mut self, input: &str) -> DialogStep {
        match self.field {
            DialogField::Title => {
                let answer = input.trim();
                if !answer.is_empty() {
                    answer.clone_into(&mut self.title);
                }
                if !self.can_save() {
                    return DialogStep::Rejected("Title must not be empty".to_owned());
                }
                self.field = DialogField::Description;
                DialogStep::Prompt(self.prompt())
            }
            DialogField::Description => {
                match input.trim() {
                    "" => {}
                    CLEAR_ANSWER => self.description.clear(),
                    answer => answer.clone_into(&mut self.description),
                }
                DialogStep::Confirmed(
                    self.title.trim().to_owned(),
                    self.description.trim().to_owned(),
                )
            }
        }
    }
}
