//! TUI constants

/// Layout heights
pub mod layout {
    use ratatui::layout::Constraint;

    pub const TITLE_HEIGHT: u16 = 3;
    pub const GAUGE_HEIGHT: u16 = 3;
    pub const MIN_SUMMARY_HEIGHT: u16 = 5;
    pub const LOG_HEIGHT: u16 = 8;
    pub const FOOTER_HEIGHT: u16 = 3;

    /// Terminals shorter than this get no log pane
    pub const MIN_HEIGHT_FOR_LOGS: u16 = 30;

    pub fn main_sections(show_logs: bool) -> Vec<Constraint> {
        let mut sections = vec![
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(GAUGE_HEIGHT),
            Constraint::Min(MIN_SUMMARY_HEIGHT),
        ];
        if show_logs {
            sections.push(Constraint::Length(LOG_HEIGHT));
        }
        sections.push(Constraint::Length(FOOTER_HEIGHT));
        sections
    }
}

/// Redraw cadence
pub const REFRESH_INTERVAL_MS: u64 = 250;

/// UI text styles
pub mod styles {
    use ratatui::style::Color;

    pub const TITLE: Color = Color::Cyan;
    pub const LABEL: Color = Color::Gray;
    pub const BORDER_ACTIVE: Color = Color::Cyan;
    pub const BORDER_NORMAL: Color = Color::White;
    pub const WARNING: Color = Color::Red;
    pub const IDLE: Color = Color::DarkGray;

    /// ratatui has no orange; this is the closest indexed colour
    pub const ORANGE: Color = Color::Indexed(208);
}

/// UI text
pub mod text {
    pub const TITLE: &str = "Router Summary";
    pub const GAUGE_TITLE: &str = "Retry budget";
    pub const SUMMARY_TITLE: &str = "Summary";
    pub const LOGS_TITLE: &str = "Logs";
    pub const WAITING: &str = "waiting for metrics";
    pub const FEED_FINISHED: &str = "feed finished";
    pub const HELP: &str = "q / Esc: quit";
}
