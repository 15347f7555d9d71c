//! Main TUI application state and logic

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::cli::tui::form::{CreateForm, FormOutcome};
use crate::config::{AppConfig, UiConfig};
use crate::errors::PumpError;
use crate::models::AppEvent;
use crate::models::notification::Notification;
use crate::models::pipeline::Pipeline;
use crate::remote::PipelineApi;
use crate::ui::{ConfirmDialog, DialogState};

/// What to run once the user confirms
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    RemovePipeline(Pipeline),
}

/// Whether the event loop should keep going after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub struct App {
    api: Arc<dyn PipelineApi>,
    pub base_api: String,
    pub ui_config: UiConfig,
    pub pipelines: Vec<Pipeline>,
    pub selected_pipeline: usize,
    pub table_state: TableState,
    pub loading: bool,
    pub last_refreshed: Option<DateTime<Local>>,
    pub confirm_dialog: Option<ConfirmDialog<PendingAction>>,
    pub create_form: Option<CreateForm>,
    pub notification: Option<Notification>,
    pub show_help: bool,
}

impl App {
    pub fn new(api: Arc<dyn PipelineApi>, config: &AppConfig) -> Self {
        Self {
            api,
            base_api: config.base_api.clone(),
            ui_config: config.ui.clone(),
            pipelines: Vec::new(),
            selected_pipeline: 0,
            table_state: TableState::default(),
            loading: false,
            last_refreshed: None,
            confirm_dialog: None,
            create_form: None,
            notification: None,
            show_help: false,
        }
    }

    pub fn selected(&self) -> Option<&Pipeline> {
        self.pipelines.get(self.selected_pipeline)
    }

    /// Fetch the pipeline list in the background
    pub fn list_pipelines(&mut self, tx: UnboundedSender<AppEvent>) {
        self.loading = true;
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let event = match api.list_pipelines().await {
                Ok(pipelines) => AppEvent::PipelinesFetched(pipelines),
                Err(e) => AppEvent::PipelinesFetchFailed(e),
            };
            let _ = tx.send(event);
        });
    }

    pub fn handle_pipelines_fetched(&mut self, pipelines: Vec<Pipeline>) {
        log::debug!("Fetched {} pipeline(s)", pipelines.len());
        self.loading = false;
        self.last_refreshed = Some(Local::now());
        self.pipelines = pipelines;

        if self.pipelines.is_empty() {
            self.selected_pipeline = 0;
            self.table_state.select(None);
        } else {
            self.selected_pipeline = self.selected_pipeline.min(self.pipelines.len() - 1);
            self.table_state.select(Some(self.selected_pipeline));
        }
    }

    /// The current list stays as it was
    pub fn handle_pipelines_fetch_failed(&mut self, error: PumpError) {
        log::warn!("Failed to list pipelines: {}", error);
        self.loading = false;
        self.notify_error(&error);
    }

    /// Ask for confirmation before removing `pipeline`
    pub fn remove_pipeline(&mut self, pipeline: Pipeline) {
        let request = pipeline.removal_confirmation();
        self.confirm_dialog = Some(ConfirmDialog::show(
            request,
            PendingAction::RemovePipeline(pipeline),
        ));
    }

    pub fn remove_selected_pipeline(&mut self) {
        if let Some(pipeline) = self.selected().cloned() {
            self.remove_pipeline(pipeline);
        }
    }

    /// Submit a new pipeline in the background
    pub fn create_pipeline(&mut self, pipeline: Pipeline, tx: UnboundedSender<AppEvent>) {
        log::info!("Creating pipeline for '{}'", pipeline.qualified_table());
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let event = match api.create_pipeline(&pipeline).await {
                Ok(()) => AppEvent::PipelineCreated(pipeline),
                Err(e) => AppEvent::MutationFailed("create".to_string(), e),
            };
            let _ = tx.send(event);
        });
    }

    pub fn execute_pending_action(&mut self, action: PendingAction, tx: UnboundedSender<AppEvent>) {
        match action {
            PendingAction::RemovePipeline(pipeline) => {
                log::info!("Removing pipeline for '{}'", pipeline.qualified_table());
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let event = match api.remove_pipeline(&pipeline).await {
                        Ok(()) => AppEvent::PipelineRemoved(pipeline),
                        Err(e) => AppEvent::MutationFailed("remove".to_string(), e),
                    };
                    let _ = tx.send(event);
                });
            }
        }
    }

    /// Resolve the open dialog; the pending action runs only on `true`
    pub fn resolve_confirm_dialog(&mut self, confirmed: bool, tx: UnboundedSender<AppEvent>) {
        if let Some(dialog) = self.confirm_dialog.take() {
            if let Some(action) = dialog.resolve(confirmed) {
                self.execute_pending_action(action, tx);
            }
        }
    }

    pub fn open_create_form(&mut self) {
        self.create_form = Some(CreateForm::new());
    }

    /// Apply one event to the state
    pub fn handle_event(&mut self, event: AppEvent, tx: UnboundedSender<AppEvent>) -> KeyOutcome {
        match event {
            AppEvent::PipelinesFetched(pipelines) => self.handle_pipelines_fetched(pipelines),
            AppEvent::PipelinesFetchFailed(error) => self.handle_pipelines_fetch_failed(error),
            AppEvent::PipelineCreated(pipeline) => {
                self.notify_info(format!(
                    "Created pipeline for '{}'",
                    pipeline.qualified_table()
                ));
                self.list_pipelines(tx);
            }
            AppEvent::PipelineRemoved(pipeline) => {
                log::info!("Removed pipeline for '{}'", pipeline.qualified_table());
                self.list_pipelines(tx);
            }
            AppEvent::MutationFailed(action, error) => {
                log::warn!("Failed to {} pipeline: {}", action, error);
                self.notify_error(&error);
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::Input(key) => return self.handle_key(key, tx),
        }
        KeyOutcome::Continue
    }

    pub fn handle_key(&mut self, key: KeyEvent, tx: UnboundedSender<AppEvent>) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        // Modals take the keyboard first
        if let Some(dialog) = self.confirm_dialog.take() {
            match dialog.handle_key(key.code) {
                DialogState::Open(dialog) => self.confirm_dialog = Some(dialog),
                DialogState::Closed(Some(action)) => self.execute_pending_action(action, tx),
                DialogState::Closed(None) => {}
            }
            return KeyOutcome::Continue;
        }

        if let Some(form) = self.create_form.as_mut() {
            match form.handle_key(key) {
                FormOutcome::Editing => {}
                FormOutcome::Submitted(pipeline) => {
                    self.create_form = None;
                    self.create_pipeline(pipeline, tx);
                }
                FormOutcome::Cancelled => self.create_form = None,
            }
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    return KeyOutcome::Quit;
                }
            }
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Up | KeyCode::Char('k') => self.previous_pipeline(),
            KeyCode::Down | KeyCode::Char('j') => self.next_pipeline(),
            KeyCode::Home => self.select_pipeline(0),
            KeyCode::End => self.select_pipeline(self.pipelines.len().saturating_sub(1)),
            KeyCode::Char('r') => self.list_pipelines(tx),
            KeyCode::Char('n') | KeyCode::Char('c') => self.open_create_form(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_pipeline(),
            _ => {}
        }
        KeyOutcome::Continue
    }

    pub fn on_tick(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    pub fn notify_info(&mut self, message: String) {
        let ttl = Duration::from_secs(self.ui_config.failure_notification_secs);
        self.notification = Some(Notification::info(message, ttl));
    }

    pub fn notify_error(&mut self, error: &PumpError) {
        self.notification = Some(Notification::from_error(error, &self.ui_config));
    }

    fn select_pipeline(&mut self, index: usize) {
        if !self.pipelines.is_empty() {
            self.selected_pipeline = index.min(self.pipelines.len() - 1);
            self.table_state.select(Some(self.selected_pipeline));
        }
    }

    pub fn next_pipeline(&mut self) {
        if !self.pipelines.is_empty() {
            self.selected_pipeline = (self.selected_pipeline + 1) % self.pipelines.len();
            self.table_state.select(Some(self.selected_pipeline));
        }
    }

    pub fn previous_pipeline(&mut self) {
        if !self.pipelines.is_empty() {
            if self.selected_pipeline > 0 {
                self.selected_pipeline -= 1;
            } else {
                self.selected_pipeline = self.pipelines.len() - 1;
            }
            self.table_state.select(Some(self.selected_pipeline));
        }
    }
}
