//! Confirmation requests shown before destructive actions

use serde::{Deserialize, Serialize};

/// What the user is asked to confirm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub title: String,
    /// Message lines, displayed in order
    pub lines: Vec<String>,
    /// Whether a negative ("No") choice is offered
    pub no_button_displayed: bool,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, lines: Vec<String>, no_button_displayed: bool) -> Self {
        Self {
            title: title.into(),
            lines,
            no_button_displayed,
        }
    }
}
