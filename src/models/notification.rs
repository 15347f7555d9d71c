//! Transient notifications shown in the status bar

use chrono::{DateTime, Local};
use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::config::UiConfig;
use crate::errors::PumpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

impl NotificationLevel {
    pub fn color(&self) -> Color {
        match self {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Error => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "✅",
            NotificationLevel::Error => "❌",
        }
    }
}

/// A message that disappears on its own after a while
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: DateTime<Local>,
    expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Local::now(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn info(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(message, NotificationLevel::Info, ttl)
    }

    /// Notification for a failed request.
    ///
    /// Backend errors show their own message for the longer duration; any
    /// other failure shows the generic text. Logging is left to the caller.
    pub fn from_error(err: &PumpError, ui: &UiConfig) -> Self {
        let ttl = if err.is_application_error() {
            ui.error_notification_secs
        } else {
            ui.failure_notification_secs
        };
        Self::new(
            err.user_message(),
            NotificationLevel::Error,
            Duration::from_secs(ttl),
        )
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GENERIC_FAILURE_MESSAGE;
    use log::{Log, Metadata, Record};
    use std::sync::{Mutex, Once};

    static RECORDED_TARGETS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct RecordingLogger;

    impl Log for RecordingLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDED_TARGETS
                .lock()
                .unwrap()
                .push(record.target().to_string());
        }

        fn flush(&self) {}
    }

    fn install_recording_logger() {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            log::set_boxed_logger(Box::new(RecordingLogger)).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    #[test]
    fn test_api_error_notification_uses_server_message() {
        let ui = UiConfig::default();
        let n = Notification::from_error(&PumpError::Api("duplicate pipeline".into()), &ui);
        assert_eq!(n.message, "duplicate pipeline");
        assert_eq!(n.level, NotificationLevel::Error);
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(5)));
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(7)));
    }

    #[test]
    fn test_transport_error_notification_is_generic_and_shorter() {
        let ui = UiConfig::default();
        let n = Notification::from_error(&PumpError::Transport("connection refused".into()), &ui);
        assert_eq!(n.message, GENERIC_FAILURE_MESSAGE);
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(4)));
    }

    #[test]
    fn test_building_a_notification_does_not_log() {
        install_recording_logger();
        let ui = UiConfig::default();
        let _ = Notification::from_error(&PumpError::Transport("connection refused".into()), &ui);
        let _ = Notification::from_error(&PumpError::Api("duplicate pipeline".into()), &ui);

        let targets = RECORDED_TARGETS.lock().unwrap();
        assert!(
            !targets.iter().any(|t| t == "pumpdash::models::notification"),
            "notifications must not log: {:?}",
            targets
        );
    }
}
