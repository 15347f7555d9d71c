//! Pipeline records as exchanged with the event-pump backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::confirm::ConfirmRequest;

/// Classification of a row-level change
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Insert,
    Update,
    Delete,
    /// Code this client does not know about, kept verbatim
    Other(String),
}

impl EventType {
    pub fn code(&self) -> &str {
        match self {
            EventType::Insert => "INS",
            EventType::Update => "UPD",
            EventType::Delete => "DEL",
            EventType::Other(code) => code,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            EventType::Insert => "Insert",
            EventType::Update => "Update",
            EventType::Delete => "Delete",
            EventType::Other(_) => "Unknown",
        }
    }

    /// Read a code typed by a user, ignoring case and surrounding blanks
    pub fn from_user_input(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_uppercase().as_str() {
            "INS" => EventType::Insert,
            "UPD" => EventType::Update,
            "DEL" => EventType::Delete,
            _ => EventType::Other(input.to_string()),
        }
    }
}

/// Wire codes match exactly; any other spelling is kept verbatim
impl From<String> for EventType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "INS" => EventType::Insert,
            "UPD" => EventType::Update,
            "DEL" => EventType::Delete,
            _ => EventType::Other(code),
        }
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.code().to_string()
    }
}

impl FromStr for EventType {
    type Err = String;

    /// Strict parsing for user input: only the three known codes are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match EventType::from_user_input(s) {
            EventType::Other(code) => Err(format!(
                "unknown event type '{}', expected one of INS, UPD, DEL",
                code
            )),
            known => Ok(known),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Extra filtering applied before an event is propagated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Names of columns whose change triggers the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_changed: Option<Vec<String>>,
}

/// A routing rule mapping table change events to an output stream.
///
/// Every field is optional; the backend is responsible for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<EventType>>,
    /// Event bus name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Pipeline {
    /// `schema.table`, with missing parts left empty
    pub fn qualified_table(&self) -> String {
        format!(
            "{}.{}",
            self.schema.as_deref().unwrap_or_default(),
            self.table.as_deref().unwrap_or_default()
        )
    }

    pub fn stream_label(&self) -> &str {
        self.stream.as_deref().unwrap_or_default()
    }

    pub fn event_types_label(&self) -> String {
        self.event_types
            .as_ref()
            .map(|types| {
                types
                    .iter()
                    .map(EventType::code)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default()
    }

    pub fn columns_changed(&self) -> &[String] {
        self.condition
            .as_ref()
            .and_then(|c| c.column_changed.as_deref())
            .unwrap_or_default()
    }

    pub fn columns_changed_label(&self) -> String {
        self.columns_changed().join(",")
    }

    /// Confirmation shown before this pipeline is removed
    pub fn removal_confirmation(&self) -> ConfirmRequest {
        let table = self.qualified_table();
        ConfirmRequest::new(
            format!("Remove pipeline for '{}'?", table),
            vec![
                "Are you sure you want to remove this pipeline?".to_string(),
                format!("- Table: '{}'", table),
                format!("- Stream: '{}'", self.stream_label()),
            ],
            true,
        )
    }
}

/// Split user supplied list input on commas and whitespace, dropping blanks
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Some(trimmed)` for non-blank input
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
