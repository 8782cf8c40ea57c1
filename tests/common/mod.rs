//! Shared fixtures: a mock story backend served by axum and recording
//! doubles for the presentation port.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use parking_lot::Mutex;
use story_client::{
    ClientConfig, ClientError, Clipboard, FormDefaults, HealthState, HttpStoryApi, Presenter,
    summary::StoryView,
};
use tokio::net::TcpListener;

/// Serves `api` under `/api/v1` on an ephemeral port and returns a client for it.
pub async fn spawn_backend(api: Router) -> HttpStoryApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().nest("/api/v1", api);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::with_base_url(&format!("http://{addr}/api/v1")).unwrap();
    HttpStoryApi::new(&config).unwrap()
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_backend() -> HttpStoryApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::with_base_url(&format!("http://{addr}/api/v1")).unwrap();
    HttpStoryApi::new(&config).unwrap()
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub health: Option<HealthState>,
    pub loading: bool,
    pub submit_enabled: bool,
    pub result_visible: bool,
    pub story: Option<String>,
    pub metadata_line: Option<String>,
    pub error_visible: bool,
    pub error: Option<String>,
    pub notifications: Vec<String>,
    pub slider_labels: Option<(String, String)>,
    pub form_resets: usize,
    pub scrolled_to_result: usize,
    pub scrolled_to_top: usize,
    pub genres: Vec<String>,
}

#[derive(Default)]
pub struct RecordingPresenter {
    screen: Mutex<Screen>,
}

impl RecordingPresenter {
    pub fn screen(&self) -> Screen {
        self.screen.lock().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn show_health(&self, state: HealthState) {
        self.screen.lock().health = Some(state);
    }

    fn set_loading(&self, visible: bool) {
        self.screen.lock().loading = visible;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.screen.lock().submit_enabled = enabled;
    }

    fn show_result(&self, view: &StoryView) {
        let mut screen = self.screen.lock();
        screen.story = Some(view.story.clone());
        screen.metadata_line = Some(view.metadata_line());
        screen.result_visible = true;
    }

    fn hide_result(&self) {
        self.screen.lock().result_visible = false;
    }

    fn scroll_to_result(&self) {
        self.screen.lock().scrolled_to_result += 1;
    }

    fn show_error(&self, message: &str) {
        let mut screen = self.screen.lock();
        screen.error = Some(message.to_string());
        screen.error_visible = true;
    }

    fn hide_error(&self) {
        self.screen.lock().error_visible = false;
    }

    fn notify(&self, message: &str) {
        self.screen.lock().notifications.push(message.to_string());
    }

    fn displayed_story(&self) -> Option<String> {
        self.screen.lock().story.clone()
    }

    fn reset_form(&self, _defaults: &FormDefaults) {
        self.screen.lock().form_resets += 1;
    }

    fn set_slider_labels(&self, temperature: &str, top_p: &str) {
        self.screen.lock().slider_labels = Some((temperature.to_string(), top_p.to_string()));
    }

    fn scroll_to_top(&self) {
        self.screen.lock().scrolled_to_top += 1;
    }

    fn show_genres(&self, genres: &[String]) {
        self.screen.lock().genres = genres.to_vec();
    }
}

/// Clipboard that records writes, or rejects them all when `deny` is set.
#[derive(Default)]
pub struct RecordingClipboard {
    pub deny: bool,
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn denying() -> Self {
        Self {
            deny: true,
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        if self.deny {
            return Err(ClientError::Clipboard("permission denied".into()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}
