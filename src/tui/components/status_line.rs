//! # StatusLine Component
//!
//! Bottom line reporting the state of the last request. Branch order is
//! deliberate and fixed:
//!
//! 1. a lookup is in flight: spinner
//! 2. the last lookup failed: the error message, in red
//! 3. otherwise: key hints
//!
//! Loading wins over a lingering error, and the error keeps showing even
//! while `CountryPanel` renders a stale success above it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusLine<'a> {
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub spinner_frame: usize,
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.is_loading {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            (
                format!("{glyph} Looking up country..."),
                Style::default().fg(Color::Cyan),
            )
        } else if let Some(error) = self.error {
            (error.to_string(), Style::default().fg(Color::Red))
        } else {
            (
                String::from("Type a country name, Enter to look it up, Esc to quit"),
                Style::default().fg(Color::DarkGray),
            )
        };

        let paragraph = Paragraph::new(text).style(style).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
