//! State of the "add card" form.

use swimlane_protocol::ColumnId;

/// The input field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The card title.
    #[default]
    Title,
    /// The optional description.
    Description,
}

/// An open "add card" form for one column.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::ColumnId;
/// use swimlane_tui::form::{CardForm, FormField};
///
/// let mut form = CardForm::new(ColumnId::Todo);
/// form.input('H');
/// form.input('i');
/// form.switch_field();
/// form.input('!');
///
/// assert_eq!(form.title, "Hi");
/// assert_eq!(form.description, "!");
/// assert_eq!(form.field, FormField::Description);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    /// Column the new card is added to.
    pub column: ColumnId,
    /// Title typed so far.
    pub title: String,
    /// Description typed so far.
    pub description: String,
    /// Field receiving input.
    pub field: FormField,
}

impl CardForm {
    /// Opens an empty form for `column`.
    #[must_use]
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            title: String::new(),
            description: String::new(),
            field: FormField::Title,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// Appends a character to the focused field.
    ///
    /// Control characters are ignored; the title stays on one line.
    pub fn input(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.focused_mut().push(ch);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Moves input to the other field.
    pub fn switch_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    /// Returns true if the title would be rejected.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}
