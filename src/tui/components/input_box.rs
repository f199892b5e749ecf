//! # InputBox Component
//!
//! Single-line text field for the country name.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally when the buffer outgrows the field
//!
//! ## State Management
//!
//! The buffer, cursor position, and scroll offset are internal state.
//! `dimmed` is a prop from the application state: the event loop sets it
//! while a lookup is in flight, and submission events never reach this
//! component during that window, so the typed text survives a premature
//! Enter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Single-line text input with horizontal scrolling.
///
/// # Props
///
/// - `dimmed`: true while a lookup is in flight
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor`: cursor position as a byte offset into `buffer`
/// - `scroll`: leftmost visible display column
pub struct InputBox {
    pub buffer: String,
    pub dimmed: bool,
    cursor: usize,
    scroll: u16,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Display column of the cursor, measured from the buffer start.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Keep the cursor inside the visible window.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            return;
        }
        let column = self.cursor_column();
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + inner_width {
            self.scroll = column - inner_width + 1;
        }
    }

    /// The slice of the buffer that fits the window at the current scroll.
    fn visible_text(&self, inner_width: u16) -> String {
        let mut skipped = 0u16;
        let mut used = 0u16;
        let mut out = String::new();
        for ch in self.buffer.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if used + w > inner_width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let (title, style) = if self.dimmed {
            ("Country (looking up)", Style::default().fg(Color::DarkGray))
        } else {
            ("Country", Style::default().fg(Color::Green))
        };

        let input = Paragraph::new(self.visible_text(inner_width))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .style(style);
        frame.render_widget(input, area);

        if !self.dimmed {
            let col = area.x + 1 + self.cursor_column().saturating_sub(self.scroll);
            frame.set_cursor_position((col, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: control characters (newlines included)
                // are dropped from pasted text.
                let sanitized: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &sanitized);
                self.cursor += sanitized.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    self.scroll = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(!input.dimmed);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_multibyte_editing_stays_on_char_boundaries() {
        let mut input = InputBox::new();
        for c in "Curaçao".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace); // removes 'ç'
        assert_eq!(input.buffer, "Curaao");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = InputBox::new();
        input.buffer = "Norway".to_string();

        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "Norway"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_blank_submit_is_suppressed() {
        let mut input = InputBox::new();
        input.buffer = "   ".to_string();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_paste_drops_control_characters() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("United\nStates\r".to_string()));
        assert_eq!(input.buffer, "UnitedStates");
    }

    #[test]
    fn test_home_and_end() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("Norway".to_string()));
        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('X'));
        assert_eq!(input.buffer, "XNorway");
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('Y'));
        assert_eq!(input.buffer, "XNorwayY");
    }

    #[test]
    fn test_long_buffer_scrolls_to_keep_cursor_visible() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("x".repeat(50)));
        // 20 columns of frame minus 2 for borders leaves 18 visible.
        input.update_scroll(18);
        assert_eq!(input.scroll, 50 - 18 + 1);
        // The last visible column is reserved for the cursor.
        assert_eq!(input.visible_text(18).len(), 17);
    }

    #[test]
    fn test_render_dimmed_while_loading() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.dimmed = true;

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("looking up"));
    }
}
