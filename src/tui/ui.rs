//! TUI rendering and layout

use ratatui::{
    Frame,
    layout::{Alignment, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::DashboardApp;
use super::constants::{layout, styles, text};
use super::helpers::{gauge_label, gauge_ratio, gauge_title, tier_color};

/// Render the whole dashboard
pub fn render_ui(f: &mut Frame, app: &DashboardApp) {
    let area = f.area();
    let show_logs = app.logs().is_some() && area.height >= layout::MIN_HEIGHT_FOR_LOGS;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(layout::main_sections(show_logs))
        .split(area);

    render_title(f, chunks[0], app);
    render_gauge(f, chunks[1], app);
    render_summary(f, chunks[2], app);
    if show_logs {
        render_logs(f, chunks[3], app);
    }
    render_footer(f, chunks[chunks.len() - 1], app);
}

fn render_title(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", text::TITLE),
            Style::default()
                .fg(styles::TITLE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- ", Style::default().fg(styles::LABEL)),
        Span::styled(
            app.router().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles::BORDER_ACTIVE)),
    )
    .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn render_gauge(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let state = app.budget();
    let color = state.map_or(styles::IDLE, |s| tier_color(s.color));

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(gauge_title(state))
                .border_style(Style::default().fg(styles::BORDER_NORMAL)),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(gauge_ratio(state))
        .label(gauge_label(state));

    f.render_widget(gauge, area);
}

fn render_summary(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let lines: Vec<Line> = app.summary().lines().map(Line::raw).collect();

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(text::SUMMARY_TITLE)
                .border_style(Style::default().fg(styles::BORDER_NORMAL)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(summary, area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = app
        .logs()
        .map(|logs| logs.tail(visible))
        .unwrap_or_default()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let logs = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(text::LOGS_TITLE)
            .border_style(Style::default().fg(styles::BORDER_NORMAL)),
    );

    f.render_widget(logs, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = vec![Span::styled(text::HELP, Style::default().fg(styles::LABEL))];
    if app.feed_finished() {
        spans.push(Span::styled("  |  ", Style::default().fg(styles::LABEL)));
        spans.push(Span::styled(
            text::FEED_FINISHED,
            Style::default().fg(styles::IDLE),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
