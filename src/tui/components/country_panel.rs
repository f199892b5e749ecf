//! # CountryPanel Component
//!
//! Displays the record from the last successful lookup: the country name,
//! its capital, and how many alternative spellings it has. Before the
//! first lookup it shows an instruction line instead.
//!
//! Purely presentational: all data arrives as props, so the panel keeps
//! rendering the last success even while a newer lookup is failing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::lookup::Country;
use crate::tui::component::Component;

pub struct CountryPanel<'a> {
    pub country: Option<&'a Country>,
}

impl Component for CountryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        match self.country {
            None => {
                lines.push(Line::styled(
                    "No country selected",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    "Enter the name of a country in the text field to get its information",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Some(country) => {
                lines.push(Line::styled(
                    country.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::raw(""));
                lines.push(Line::raw(format!("Capital: {}", country.capital)));
                lines.push(Line::raw(format!(
                    "{} alternative spellings",
                    country.alt_spellings.len()
                )));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::norway;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(country: Option<&Country>) -> String {
        let backend = TestBackend::new(80, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut panel = CountryPanel { country };
        terminal
            .draw(|f| {
                panel.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_instructions_before_first_lookup() {
        let text = render_to_text(None);
        assert!(text.contains("No country selected"));
        assert!(text.contains("Enter the name of a country"));
    }

    #[test]
    fn test_shows_country_details() {
        let country = norway();
        let text = render_to_text(Some(&country));
        assert!(text.contains("Norway"));
        assert!(text.contains("Capital: Oslo"));
        assert!(text.contains("3 alternative spellings"));
        assert!(!text.contains("No country selected"));
    }
}
