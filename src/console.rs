use std::io::Write;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{
    config::FormDefaults,
    presenter::{HealthState, Presenter},
    summary::StoryView,
};

/// Presenter that renders onto a text stream, typically stdout.
pub struct ConsolePresenter<W: Write + Send> {
    inner: Mutex<ConsoleState<W>>,
}

struct ConsoleState<W> {
    out: W,
    story: Option<String>,
    submit_enabled: bool,
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Mutex::new(ConsoleState {
                out,
                story: None,
                submit_enabled: false,
            }),
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.inner.lock().submit_enabled
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().out
    }

    fn emit(&self, text: &str) {
        let mut state = self.inner.lock();
        if let Err(err) = writeln!(state.out, "{text}").and_then(|_| state.out.flush()) {
            warn!(error = %err, "console write failed");
        }
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn show_health(&self, state: HealthState) {
        let marker = if state.is_error() { "[error]" } else { "[ok]" };
        self.emit(&format!("{marker} {}", state.label()));
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            self.emit("Генерация истории...");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.inner.lock().submit_enabled = enabled;
    }

    fn show_result(&self, view: &StoryView) {
        self.inner.lock().story = Some(view.story.clone());
        self.emit(&view.story);
        self.emit(&view.metadata_line());
    }

    fn hide_result(&self) {}

    fn scroll_to_result(&self) {
        debug!("scroll to result");
    }

    fn show_error(&self, message: &str) {
        self.emit(message);
    }

    fn hide_error(&self) {}

    fn notify(&self, message: &str) {
        self.emit(message);
    }

    fn displayed_story(&self) -> Option<String> {
        self.inner.lock().story.clone()
    }

    fn reset_form(&self, defaults: &FormDefaults) {
        debug!(length = %defaults.length, "form reset");
    }

    fn set_slider_labels(&self, temperature: &str, top_p: &str) {
        self.emit(&format!("temperature = {temperature}, top_p = {top_p}"));
    }

    fn scroll_to_top(&self) {
        debug!("scroll to top");
    }

    fn show_genres(&self, genres: &[String]) {
        self.emit(&format!("Жанры: {}", genres.join(", ")));
    }
}
