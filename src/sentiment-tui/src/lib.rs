//! Terminal user interface for the sentiment analyzer.
//!
//! A single-screen ratatui application: a text input, a submit trigger, an
//! error banner, and a result panel bound to the analysis state machine in
//! `sentiment-core`. The network call is the only suspension point; it runs
//! on a spawned task and reports back through the [`events::AppEvent`]
//! channel.

mod app;
mod events;
mod terminal;
mod ui;

pub use app::App;
pub use events::AppEvent;
pub use terminal::TuiTerminal;

use sentiment_client::SentimentClient;

/// Run the interactive analyzer until the user exits.
pub async fn run(client: SentimentClient) -> anyhow::Result<()> {
    let mut terminal = TuiTerminal::new()?;
    App::new(client).run(&mut terminal).await
}
