use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info, warn};

use crate::{
    api::{GenerationResponse, StatisticsSnapshot, StoryApi},
    config::FormDefaults,
    error::{ClientError, ErrorKind},
    form::FormFields,
    presenter::{Clipboard, HealthState, Presenter},
    summary::{StatisticsSummary, StoryView},
};

pub const GENERATION_FAILED: &str = "Ошибка генерации истории";
pub const COPY_SUCCEEDED: &str = "История скопирована в буфер обмена!";
pub const COPY_FAILED: &str = "Не удалось скопировать историю";
pub const STATISTICS_FAILED: &str = "Не удалось загрузить статистику";

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(GenerationResponse),
    /// Carries the text shown in the error panel.
    Failed(String),
    /// A newer submission started before this one finished; its result was dropped.
    Superseded,
}

impl SubmitOutcome {
    /// Error panel text when the submission failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct ClientController<A, P, C> {
    api: A,
    presenter: P,
    clipboard: C,
    defaults: FormDefaults,
    latest_ticket: AtomicU64,
}

impl<A, P, C> ClientController<A, P, C>
where
    A: StoryApi,
    P: Presenter,
    C: Clipboard,
{
    pub fn new(api: A, presenter: P, clipboard: C, defaults: FormDefaults) -> Self {
        Self {
            api,
            presenter,
            clipboard,
            defaults,
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Reflects backend health, then opens the form for submissions.
    pub async fn initialize(&self) -> HealthState {
        let state = self.check_health().await;
        self.presenter.set_submit_enabled(true);
        state
    }

    pub async fn check_health(&self) -> HealthState {
        let state = match self.api.health().await {
            Ok(health) if health.is_healthy() => HealthState::Healthy,
            Ok(health) => {
                warn!(
                    status = %health.status,
                    failing = ?health.failing_services(),
                    "backend reports degraded health"
                );
                HealthState::Degraded
            }
            Err(err) => {
                error!(error = %err, "health check failed");
                HealthState::Unreachable
            }
        };
        self.presenter.show_health(state);
        state
    }

    pub async fn submit(&self, form: &FormFields) -> SubmitOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        self.presenter.hide_result();
        self.presenter.hide_error();
        self.presenter.set_loading(true);
        self.presenter.set_submit_enabled(false);
        let in_flight = InFlight {
            presenter: &self.presenter,
            latest_ticket: &self.latest_ticket,
            ticket,
        };

        let result = self.generate(form).await;

        if !in_flight.is_current() {
            info!(ticket, "discarding response of superseded submission");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                let view = StoryView::from_response(&response);
                self.presenter.show_result(&view);
                self.presenter.scroll_to_result();
                info!(
                    ticket,
                    words = response.metadata.word_count,
                    seconds = response.metadata.generation_time,
                    "story rendered"
                );
                SubmitOutcome::Success(response)
            }
            Err(err) => {
                match err.kind() {
                    ErrorKind::Connectivity => {
                        error!(ticket, error = %err, "story generation failed")
                    }
                    ErrorKind::Application | ErrorKind::Local => {
                        warn!(ticket, error = %err, "story generation rejected")
                    }
                }
                let message = format!("Ошибка: {}", err.user_message(GENERATION_FAILED));
                self.presenter.show_error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    async fn generate(&self, form: &FormFields) -> Result<GenerationResponse, ClientError> {
        let request = form.to_request()?;
        info!(
            length = request.length.as_str(),
            temperature = request.temperature,
            top_p = request.top_p,
            "requesting story"
        );
        self.api.generate(&request).await
    }

    pub async fn copy_story(&self) -> bool {
        let text = self.presenter.displayed_story().unwrap_or_default();
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                self.presenter.notify(COPY_SUCCEEDED);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to copy story");
                self.presenter.notify(COPY_FAILED);
                false
            }
        }
    }

    pub fn reset(&self) {
        self.presenter.reset_form(&self.defaults);
        self.presenter.hide_result();
        self.presenter
            .set_slider_labels(&self.defaults.temperature, &self.defaults.top_p);
        self.presenter.scroll_to_top();
    }

    pub async fn show_statistics(&self) -> Option<StatisticsSnapshot> {
        match self.api.statistics().await {
            Ok(stats) => {
                self.presenter
                    .notify(&StatisticsSummary(&stats).to_string());
                Some(stats)
            }
            Err(err) => {
                error!(error = %err, "failed to load statistics");
                self.presenter.notify(STATISTICS_FAILED);
                None
            }
        }
    }

    /// Fills the genre suggestions. Failure leaves the field free-form.
    pub async fn load_genres(&self) -> Vec<String> {
        match self.api.categories().await {
            Ok(categories) => {
                info!(count = categories.categories.len(), "genres loaded");
                self.presenter.show_genres(&categories.categories);
                categories.categories
            }
            Err(err) => {
                warn!(error = %err, "failed to load genres");
                Vec::new()
            }
        }
    }
}

/// Restores the loading indicator and submit control when a submission ends,
/// on every exit path. Only the latest submission touches them.
struct InFlight<'a, P: Presenter> {
    presenter: &'a P,
    latest_ticket: &'a AtomicU64,
    ticket: u64,
}

impl<P: Presenter> InFlight<'_, P> {
    fn is_current(&self) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == self.ticket
    }
}

impl<P: Presenter> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        if self.is_current() {
            self.presenter.set_loading(false);
            self.presenter.set_submit_enabled(true);
        }
    }
}
