use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryPanel, StatusLine};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(2)]);
    let [title_area, main_area, input_area, status_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        format!("Atlas ({})", app.source.name())
    } else {
        format!("Atlas ({}) | {}", app.source.name(), app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Country panel - keeps showing the last success even next to an error
    let mut panel = CountryPanel {
        country: app.country.as_ref(),
    };
    panel.render(frame, main_area);

    // Input area
    tui.input_box.render(frame, input_area);

    // Status line
    let mut status = StatusLine {
        is_loading: app.is_loading,
        error: app.error.as_deref(),
        spinner_frame,
    };
    status.render(frame, status_area);
}
