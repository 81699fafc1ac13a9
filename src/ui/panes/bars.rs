//! Bar chart pane
//!
//! One bar per array slot. Colors follow the markers of the current
//! [`Snapshot`]: the compared pair is red, settled slots are green, the
//! rest blue. Values are printed inside the bars when the bars are wide
//! enough to hold them.

use crate::session::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width and gap of each bar for `count` bars in `inner_width` columns
pub fn bar_layout(count: usize, inner_width: u16) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    // Prefer a one-column gap while every bar still gets at least two columns
    if inner_width >= count.saturating_mul(3) {
        let width = (inner_width + 1) / count - 1;
        (width, 1)
    } else {
        ((inner_width / count).max(1), 0)
    }
}

/// Heights are shifted so the smallest value still shows as a sliver
fn bar_height(value: i32, floor: i64) -> u64 {
    u64::try_from(i64::from(value) - floor).unwrap_or(0)
}

/// Render the array as a bar chart
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match snapshot.kind {
        Some(kind) => format!(" {} ({} values) ", kind.title(), snapshot.values.len()),
        None => format!(" Array ({} values) ", snapshot.values.len()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if snapshot.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let markers = snapshot.markers();
    let min = snapshot.values.iter().copied().min().unwrap_or(0);
    let floor = i64::from(min.min(1)) - 1;
    let (bar_width, bar_gap) = bar_layout(snapshot.values.len(), area.width.saturating_sub(2));
    let label_fits = |value: i32| value.to_string().len() <= usize::from(bar_width);

    let bars: Vec<Bar> = snapshot
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if markers.is_highlighted(index) {
                DEFAULT_THEME.bar_compared
            } else if markers.is_settled(index) {
                DEFAULT_THEME.bar_settled
            } else {
                DEFAULT_THEME.bar
            };
            let label = if label_fits(value) {
                value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(bar_height(value, floor))
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(DEFAULT_THEME.bar_label).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_share_the_width() {
        assert_eq!(bar_layout(10, 100), (9, 1));
        assert_eq!(bar_layout(50, 100), (2, 0));
        assert_eq!(bar_layout(200, 100), (1, 0));
        assert_eq!(bar_layout(0, 100), (1, 0));
    }

    #[test]
    fn negative_values_still_have_height() {
        assert_eq!(bar_height(-5, -6), 1);
        assert_eq!(bar_height(10, 0), 10);
    }
}
