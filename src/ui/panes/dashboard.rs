//! Analysis dashboard and algorithm description panes

use crate::algorithms::AlgorithmKind;
use crate::session::{Playback, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Data needed to render the dashboard
pub struct DashboardRenderData<'a> {
    pub snapshot: &'a Snapshot,
    pub playback: Playback,
    pub tick_interval: Duration,
    pub pending_tasks: usize,
    pub max_pending_tasks: usize,
}

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

pub fn status_label(playback: Playback) -> &'static str {
    match playback {
        Playback::Idle => "Ready",
        Playback::Playing => "Running",
        Playback::Paused => "Paused",
        Playback::Finished => "Complete!",
    }
}

/// Render the statistics of the running session
pub fn render_dashboard_pane(frame: &mut Frame, area: Rect, data: &DashboardRenderData<'_>) {
    let snapshot = data.snapshot;
    let block = Block::default()
        .title(" Analysis Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let algorithm = snapshot
        .kind
        .map_or_else(|| "(none selected)".to_string(), |kind| kind.title().to_string());

    let status_color = match data.playback {
        Playback::Finished => DEFAULT_THEME.success,
        Playback::Paused => DEFAULT_THEME.secondary,
        Playback::Playing => DEFAULT_THEME.primary,
        Playback::Idle => DEFAULT_THEME.comment,
    };

    let mut lines = vec![
        row("Algorithm", algorithm),
        row("Comparisons", snapshot.comparisons.to_string()),
        row("Swaps", snapshot.swaps.to_string()),
        row("Time", format!("{:.2} ms", snapshot.elapsed_ms())),
        row("Steps", snapshot.steps.to_string()),
        row("Interval", format!("{} ms", data.tick_interval.as_millis())),
    ];
    if matches!(snapshot.kind, Some(AlgorithmKind::Quick | AlgorithmKind::Merge)) {
        lines.push(row(
            "Task stack",
            format!("{} (max {})", data.pending_tasks, data.max_pending_tasks),
        ));
    }
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<12}", "Status"),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            status_label(data.playback),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the description and Big-O summary of the selected algorithm
pub fn render_description_pane(frame: &mut Frame, area: Rect, kind: Option<AlgorithmKind>) {
    let block = Block::default()
        .title(" Algorithm Description ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines = match kind {
        Some(kind) => {
            let (best, average, worst) = kind.complexity();
            vec![
                Line::from(Span::styled(
                    kind.title(),
                    Style::default()
                        .fg(DEFAULT_THEME.title)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(kind.description()),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Big-O: Best {}, Avg {}, Worst {}", best, average, worst),
                    Style::default().fg(DEFAULT_THEME.secondary),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Pick an algorithm: [b]ubble [i]nsertion [s]election quic[k] [m]erge",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
