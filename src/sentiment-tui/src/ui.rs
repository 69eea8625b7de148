//! Rendering for the single analyzer screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use sentiment_core::{AnalysisState, SentimentLabel, display_of};

use crate::app::{App, BackendStatus};

const TITLE: &str = "Sentiment Analysis";
const SUBTITLE: &str = "Analyze the emotional tone of any text";
const PLACEHOLDER: &str = "Type or paste your text here to analyze its sentiment...";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) fn render(frame: &mut Frame, app: &App) {
    let [header, input, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(frame.area());

    render_header(frame, header);
    render_input(frame, input, app);
    render_status(frame, status, app);
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            TITLE,
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(SUBTITLE, Style::new().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.session.input();
    let line = if text.is_empty() {
        Line::styled(
            PLACEHOLDER,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::from(vec![Span::raw(text), cursor_span(app)])
    };

    let block = Block::bordered().title(" Enter your text ");
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// A visible cursor at the end of the input, hidden while a request is in
/// flight (the input is effectively read-only to the submission snapshot).
fn cursor_span(app: &App) -> Span<'static> {
    if app.session.state().is_pending() {
        Span::raw("")
    } else {
        Span::styled("▌", Style::new().fg(Color::Cyan))
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    match app.session.state() {
        AnalysisState::Idle | AnalysisState::Validating => {}
        AnalysisState::Pending { .. } => {
            let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(spinner, Style::new().fg(Color::Cyan)),
                Span::raw(" Analyzing..."),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
        AnalysisState::Error { message } => {
            let block = Block::bordered()
                .title(" Error ")
                .border_style(Style::new().fg(Color::Red));
            let body = Paragraph::new(Line::styled(
                message.clone(),
                Style::new().fg(Color::Red),
            ))
            .wrap(Wrap { trim: false })
            .block(block);
            frame.render_widget(body, banner_area(area, 3));
        }
        AnalysisState::Success { label } => {
            let display = display_of(label);
            let color = label_color(display.label);
            let lines = vec![
                Line::from(vec![
                    Span::raw(display.emoji),
                    Span::raw("  "),
                    Span::styled(
                        capitalize(label),
                        Style::new().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(display.caption, Style::new().fg(Color::DarkGray)),
            ];
            let block = Block::bordered().title(" Analysis Result ");
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                banner_area(area, 4),
            );
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let submit_hint = if app.session.state().is_pending() {
        Span::styled("Enter analyze (request in flight)", Style::new().fg(Color::DarkGray))
    } else if app.session.can_submit() {
        Span::raw("Enter analyze")
    } else {
        Span::styled("Enter analyze", Style::new().fg(Color::DarkGray))
    };

    let mut spans = vec![
        submit_hint,
        Span::raw("  ·  Ctrl+U clear  ·  Esc quit    "),
        Span::styled(
            format!("API: {}", app.api_url()),
            Style::new().fg(Color::DarkGray),
        ),
    ];
    match app.backend {
        BackendStatus::Unknown => {}
        BackendStatus::Reachable => {
            spans.push(Span::styled(" (ok)", Style::new().fg(Color::Green)));
        }
        BackendStatus::Unreachable => {
            spans.push(Span::styled(" (unreachable)", Style::new().fg(Color::Red)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Clamp a status widget to `height` rows at the top of its area.
fn banner_area(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}

/// Terminal color for a sentiment bucket.
pub(crate) fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Yellow,
    }
}

/// Uppercase the first character of a raw label for the result panel.
pub(crate) fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
