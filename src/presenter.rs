use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{config::FormDefaults, error::ClientError, summary::StoryView};

/// State of the backend indicator in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Degraded,
    Unreachable,
}

impl HealthState {
    pub fn label(self) -> &'static str {
        match self {
            HealthState::Healthy => "Система готова к работе",
            HealthState::Degraded => "Система частично доступна",
            HealthState::Unreachable => "Ошибка подключения к серверу",
        }
    }

    /// Degraded and unreachable share the error styling.
    pub fn is_error(self) -> bool {
        !matches!(self, HealthState::Healthy)
    }
}

/// Rendering surface the controller drives. Implementations own their own
/// interior state, so every call takes `&self`.
pub trait Presenter: Send + Sync {
    fn show_health(&self, state: HealthState);
    fn set_loading(&self, visible: bool);
    fn set_submit_enabled(&self, enabled: bool);

    fn show_result(&self, view: &StoryView);
    fn hide_result(&self);
    fn scroll_to_result(&self);

    fn show_error(&self, message: &str);
    fn hide_error(&self);

    /// Blocking, modal-style message.
    fn notify(&self, message: &str);

    /// Story text currently in the output area, if any was rendered.
    fn displayed_story(&self) -> Option<String>;

    fn reset_form(&self, defaults: &FormDefaults);
    fn set_slider_labels(&self, temperature: &str, top_p: &str);
    fn scroll_to_top(&self);

    fn show_genres(&self, genres: &[String]);
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClientError>;
}

/// Process-local clipboard, used where no system clipboard is reachable.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        self.contents.lock().replace(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_healthy_is_not_an_error() {
        assert!(!HealthState::Healthy.is_error());
        assert!(HealthState::Degraded.is_error());
        assert!(HealthState::Unreachable.is_error());
    }

    #[tokio::test]
    async fn memory_clipboard_keeps_last_write() {
        let clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }
}
