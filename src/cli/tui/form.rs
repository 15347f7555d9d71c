//! Create-pipeline form shown as a modal in the dashboard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::pipeline::{Condition, EventType, Pipeline, non_blank, split_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Schema,
    Table,
    EventTypes,
    Stream,
    ColumnChanged,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Schema,
        FormField::Table,
        FormField::EventTypes,
        FormField::Stream,
        FormField::ColumnChanged,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Schema => "Schema",
            FormField::Table => "Table",
            FormField::EventTypes => "Event types",
            FormField::Stream => "Stream",
            FormField::ColumnChanged => "Columns changed",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            FormField::Schema => "database schema name",
            FormField::Table => "table name",
            FormField::EventTypes => "INS, UPD, DEL (comma separated)",
            FormField::Stream => "target event bus",
            FormField::ColumnChanged => "only fire when these columns change",
        }
    }
}

/// Result of feeding a key to the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Editing,
    Submitted(Pipeline),
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    values: [String; 5],
    focused: usize,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[Self::index_of(field)]
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        self.values[Self::index_of(field)] = value.into();
    }

    fn index_of(field: FormField) -> usize {
        FormField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FormField::ALL.len();
    }

    pub fn previous_field(&mut self) {
        self.focused = if self.focused == 0 {
            FormField::ALL.len() - 1
        } else {
            self.focused - 1
        };
    }

    /// Build the record; blank inputs become absent fields
    pub fn to_pipeline(&self) -> Pipeline {
        let event_types: Vec<EventType> = split_list(self.value(FormField::EventTypes))
            .into_iter()
            .map(|code| EventType::from_user_input(&code))
            .collect();
        let columns = split_list(self.value(FormField::ColumnChanged));

        Pipeline {
            schema: non_blank(self.value(FormField::Schema)),
            table: non_blank(self.value(FormField::Table)),
            event_types: (!event_types.is_empty()).then_some(event_types),
            stream: non_blank(self.value(FormField::Stream)),
            condition: (!columns.is_empty()).then(|| Condition {
                column_changed: Some(columns),
            }),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancelled,
            KeyCode::Enter => return FormOutcome::Submitted(self.to_pipeline()),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            KeyCode::Backspace => {
                self.values[self.focused].pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[self.focused].push(c);
            }
            _ => {}
        }
        FormOutcome::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut CreateForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(form: &mut CreateForm, code: KeyCode) -> FormOutcome {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_and_submitting_builds_pipeline() {
        let mut form = CreateForm::new();
        type_text(&mut form, "shop");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "orderz");
        press(&mut form, KeyCode::Backspace);
        type_text(&mut form, "s");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "ins, upd");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "event.bus.orders");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "status,amount");

        let FormOutcome::Submitted(pipeline) = press(&mut form, KeyCode::Enter) else {
            panic!("Enter must submit the form");
        };
        assert_eq!(pipeline.qualified_table(), "shop.orders");
        assert_eq!(
            pipeline.event_types,
            Some(vec![EventType::Insert, EventType::Update])
        );
        assert_eq!(pipeline.stream.as_deref(), Some("event.bus.orders"));
        assert_eq!(pipeline.columns_changed(), ["status", "amount"]);
    }

    #[test]
    fn test_blank_form_yields_empty_pipeline() {
        let mut form = CreateForm::new();
        type_text(&mut form, "   ");
        assert_eq!(form.to_pipeline(), Pipeline::default());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = CreateForm::new();
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focused_field(), FormField::ColumnChanged);
        press(&mut form, KeyCode::Down);
        assert_eq!(form.focused_field(), FormField::Schema);
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = CreateForm::new();
        type_text(&mut form, "shop");
        assert_eq!(press(&mut form, KeyCode::Esc), FormOutcome::Cancelled);
    }
}
