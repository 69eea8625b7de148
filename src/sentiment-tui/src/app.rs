//! Main application loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use sentiment_client::SentimentClient;
use sentiment_core::{AnalysisEvent, AnalysisSession};

use crate::events::AppEvent;
use crate::terminal::TuiTerminal;
use crate::ui;

/// How often the pending spinner advances.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Whether the backend health probe has answered, and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

/// The interactive analyzer application.
///
/// Owns the [`AnalysisSession`] state machine and the event channel; the
/// network call runs on a spawned task, so the UI stays responsive while a
/// request is pending. Submissions while pending are ignored, which keeps at
/// most one request in flight.
pub struct App {
    pub(crate) session: AnalysisSession,
    pub(crate) backend: BackendStatus,
    pub(crate) spinner_frame: usize,
    client: SentimentClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    running: bool,
}

impl App {
    pub fn new(client: SentimentClient) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session: AnalysisSession::new(),
            backend: BackendStatus::Unknown,
            spinner_frame: 0,
            client,
            events_tx,
            events_rx,
            running: true,
        }
    }

    pub(crate) fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// Run the event loop until the user exits.
    pub async fn run(mut self, terminal: &mut TuiTerminal) -> Result<()> {
        self.spawn_health_check();
        let mut input_events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        while self.running {
            terminal.draw(|frame| ui::render(frame, &self))?;

            tokio::select! {
                maybe_event = input_events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(error)) => return Err(error.into()),
                    None => break,
                },
                Some(event) = self.events_rx.recv() => self.handle_app_event(event),
                _ = tick.tick() => {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.running = false,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.running = false,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.set_text(String::new());
            }
            (KeyCode::Enter, _) => self.submit(),
            (KeyCode::Backspace, _) => {
                let mut text = self.session.input().to_owned();
                text.pop();
                self.set_text(text);
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let mut text = self.session.input().to_owned();
                text.push(c);
                self.set_text(text);
            }
            _ => {}
        }
    }

    fn set_text(&mut self, text: String) {
        self.session.apply(AnalysisEvent::TextChanged(text));
    }

    /// Submit the current text. The trigger is disabled while a request is
    /// in flight; whitespace-only input surfaces the validation message.
    fn submit(&mut self) {
        if self.session.state().is_pending() {
            return;
        }
        let Some(submission) = self.session.apply(AnalysisEvent::Submitted) else {
            return;
        };

        let client = self.client.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.analyze(&submission.text).await.map_err(|error| {
                tracing::warn!(error = %error, "analysis request failed");
                error.to_analysis_error()
            });
            let _ = events_tx.send(AppEvent::AnalysisCompleted {
                request_id: submission.request_id,
                outcome,
            });
        });
    }

    /// Probe the backend once at startup; informational only.
    fn spawn_health_check(&self) {
        let client = self.client.clone();
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let healthy = match client.check_health().await {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!(error = %error, "sentiment backend health check failed");
                    false
                }
            };
            let _ = events_tx.send(AppEvent::HealthChecked(healthy));
        });
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisCompleted {
                request_id,
                outcome,
            } => {
                self.session.apply(AnalysisEvent::Completed {
                    request_id,
                    outcome,
                });
            }
            AppEvent::HealthChecked(healthy) => {
                self.backend = if healthy {
                    BackendStatus::Reachable
                } else {
                    BackendStatus::Unreachable
                };
            }
        }
    }
}
