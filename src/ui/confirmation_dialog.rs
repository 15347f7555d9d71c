//! Confirmation dialog shown before destructive actions
//!
//! The dialog carries the action to run on an affirmative answer. Resolving
//! it hands that action back only when the user said yes, so callers never
//! have to remember to check the answer themselves.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io::{self, BufRead, Write};

use crate::models::confirm::ConfirmRequest;
use crate::ui::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Yes,
    No,
}

impl DialogButton {
    pub fn label(&self) -> &'static str {
        match self {
            DialogButton::Yes => "Yes",
            DialogButton::No => "No",
        }
    }
}

/// Where the dialog stands after a key press
#[derive(Debug)]
pub enum DialogState<A> {
    Open(ConfirmDialog<A>),
    /// Closed; holds the continuation only if the answer was affirmative
    Closed(Option<A>),
}

/// An open confirmation dialog holding its continuation `A`
#[derive(Debug, Clone)]
pub struct ConfirmDialog<A> {
    request: ConfirmRequest,
    selected: DialogButton,
    on_confirm: A,
}

impl<A> ConfirmDialog<A> {
    pub fn show(request: ConfirmRequest, on_confirm: A) -> Self {
        // Initial focus sits on the safe choice when there is one
        let selected = if request.no_button_displayed {
            DialogButton::No
        } else {
            DialogButton::Yes
        };
        Self {
            request,
            selected,
            on_confirm,
        }
    }

    pub fn request(&self) -> &ConfirmRequest {
        &self.request
    }

    pub fn selected(&self) -> DialogButton {
        self.selected
    }

    pub fn pending_action(&self) -> &A {
        &self.on_confirm
    }

    /// Buttons offered, in display order
    pub fn buttons(&self) -> Vec<DialogButton> {
        if self.request.no_button_displayed {
            vec![DialogButton::Yes, DialogButton::No]
        } else {
            vec![DialogButton::Yes]
        }
    }

    /// Close the dialog with `confirmed`; the continuation is returned only for `true`
    pub fn resolve(self, confirmed: bool) -> Option<A> {
        confirmed.then_some(self.on_confirm)
    }

    /// Close without an answer
    pub fn dismiss(self) -> Option<A> {
        self.resolve(false)
    }

    fn toggle_selection(&mut self) {
        if self.request.no_button_displayed {
            self.selected = match self.selected {
                DialogButton::Yes => DialogButton::No,
                DialogButton::No => DialogButton::Yes,
            };
        }
    }

    pub fn handle_key(mut self, code: KeyCode) -> DialogState<A> {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogState::Closed(self.resolve(true)),
            KeyCode::Char('n') | KeyCode::Char('N') if self.request.no_button_displayed => {
                DialogState::Closed(self.resolve(false))
            }
            KeyCode::Enter => {
                let confirmed = self.selected == DialogButton::Yes;
                DialogState::Closed(self.resolve(confirmed))
            }
            KeyCode::Esc => DialogState::Closed(self.dismiss()),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_selection();
                DialogState::Open(self)
            }
            _ => DialogState::Open(self),
        }
    }
}

/// Render the dialog as a centered popup
pub fn render_confirmation_dialog<A>(f: &mut Frame, dialog: &ConfirmDialog<A>) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(dialog.request.title.as_str())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::with_capacity(dialog.request.lines.len() * 2);
    for line in &dialog.request.lines {
        lines.push(Line::from(line.as_str()));
        lines.push(Line::from(""));
    }
    let message = Paragraph::new(lines)
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });
    f.render_widget(message, chunks[0]);

    let mut spans = Vec::new();
    for button in dialog.buttons() {
        let style = if button == dialog.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(format!(" {} ", button.label()), style));
        spans.push(Span::raw("  "));
    }
    let buttons = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    f.render_widget(buttons, chunks[1]);
}

/// Ask for confirmation on a plain terminal.
///
/// With a negative option the answer must be `y`/`yes`; without one, any
/// line confirms. End of input counts as dismissal.
pub fn confirm_in_terminal<R: BufRead, W: Write>(
    request: &ConfirmRequest,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(output)?;
    writeln!(output, "{}", request.title)?;
    writeln!(output, "{}", "═".repeat(request.title.chars().count()))?;
    for line in &request.lines {
        writeln!(output, "{}", line)?;
    }
    writeln!(output)?;

    if request.no_button_displayed {
        write!(output, "Do you want to continue? [y/N]: ")?;
    } else {
        write!(output, "Press Enter to continue: ")?;
    }
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    if request.no_button_displayed {
        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    } else {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn request(no_button_displayed: bool) -> ConfirmRequest {
        ConfirmRequest::new(
            "Remove pipeline for 'shop.orders'?",
            vec![
                "Are you sure you want to remove this pipeline?".to_string(),
                "- Stream: 'orders'".to_string(),
            ],
            no_button_displayed,
        )
    }

    fn rendered_text<A>(dialog: &ConfirmDialog<A>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_confirmation_dialog(f, dialog))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_without_no_button_only_yes_is_offered() {
        let dialog = ConfirmDialog::show(request(false), "go");
        assert_eq!(dialog.buttons(), vec![DialogButton::Yes]);
        assert_eq!(dialog.selected(), DialogButton::Yes);

        // 'n' is not an available action
        let dialog = match dialog.handle_key(KeyCode::Char('n')) {
            DialogState::Open(d) => d,
            DialogState::Closed(_) => panic!("'n' must not close a dialog without a No button"),
        };
        // Selection cannot move to a hidden button
        let dialog = match dialog.handle_key(KeyCode::Tab) {
            DialogState::Open(d) => d,
            DialogState::Closed(_) => panic!("Tab must not close the dialog"),
        };
        assert_eq!(dialog.selected(), DialogButton::Yes);

        let text = rendered_text(&dialog);
        assert!(text.contains(" Yes "));
        assert!(!text.contains(" No "));
    }

    #[test]
    fn test_with_no_button_both_are_offered() {
        let dialog = ConfirmDialog::show(request(true), "go");
        assert_eq!(dialog.buttons(), vec![DialogButton::Yes, DialogButton::No]);
        assert_eq!(dialog.selected(), DialogButton::No);

        let text = rendered_text(&dialog);
        assert!(text.contains("Remove pipeline for 'shop.orders'?"));
        assert!(text.contains("Are you sure you want to remove this pipeline?"));
        assert!(text.contains(" Yes "));
        assert!(text.contains(" No "));
    }

    #[test]
    fn test_continuation_only_on_affirmative_path() {
        assert_eq!(ConfirmDialog::show(request(true), 7).resolve(true), Some(7));
        assert_eq!(ConfirmDialog::show(request(true), 7).resolve(false), None);
        assert_eq!(ConfirmDialog::show(request(true), 7).dismiss(), None);

        match ConfirmDialog::show(request(true), 7).handle_key(KeyCode::Char('y')) {
            DialogState::Closed(action) => assert_eq!(action, Some(7)),
            DialogState::Open(_) => panic!("'y' must close the dialog"),
        }
        match ConfirmDialog::show(request(true), 7).handle_key(KeyCode::Char('n')) {
            DialogState::Closed(action) => assert_eq!(action, None),
            DialogState::Open(_) => panic!("'n' must close the dialog"),
        }
        match ConfirmDialog::show(request(true), 7).handle_key(KeyCode::Esc) {
            DialogState::Closed(action) => assert_eq!(action, None),
            DialogState::Open(_) => panic!("Esc must close the dialog"),
        }
    }

    #[test]
    fn test_enter_resolves_with_highlighted_button() {
        // Focus starts on No
        match ConfirmDialog::show(request(true), ()).handle_key(KeyCode::Enter) {
            DialogState::Closed(action) => assert!(action.is_none()),
            DialogState::Open(_) => panic!("Enter must close the dialog"),
        }

        let dialog = match ConfirmDialog::show(request(true), ()).handle_key(KeyCode::Left) {
            DialogState::Open(d) => d,
            DialogState::Closed(_) => panic!("Left must not close the dialog"),
        };
        assert_eq!(dialog.selected(), DialogButton::Yes);
        match dialog.handle_key(KeyCode::Enter) {
            DialogState::Closed(action) => assert!(action.is_some()),
            DialogState::Open(_) => panic!("Enter must close the dialog"),
        }
    }

    #[test]
    fn test_terminal_confirmation_answers() {
        let mut out = Vec::new();
        assert!(confirm_in_terminal(&request(true), &mut "yes\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm_in_terminal(&request(true), &mut "\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm_in_terminal(&request(true), &mut "nope\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm_in_terminal(&request(true), &mut "".as_bytes(), &mut out).unwrap());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Remove pipeline for 'shop.orders'?"));
        assert!(printed.contains("[y/N]"));
    }

    #[test]
    fn test_terminal_confirmation_without_negative_option() {
        let mut out = Vec::new();
        assert!(confirm_in_terminal(&request(false), &mut "\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm_in_terminal(&request(false), &mut "".as_bytes(), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Press Enter to continue"));
    }
}
