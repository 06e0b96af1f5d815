//! Keypad widget for the terminal
//!
//! Renders the shared [`Keypad`] layout as a grid of buttons, highlights the
//! last pressed one and maps mouse clicks back to tokens.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Token;
use crate::keypad::{Keypad, KeypadButtonDef};

/// Converts a click position inside `area` to the token of the button there
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<Token> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (rows, cols) = keypad.dimensions();
    let btn_width = (area.width - 2) / cols as u16;
    let btn_height = (area.height - 2) / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = usize::from((rel_x - 1) / btn_width);
    let row = usize::from((rel_y - 1) / btn_height);
    keypad.get_button_at(row, col).map(|btn| btn.token)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    pressed: Option<Token>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            pressed: None,
        }
    }

    /// Highlights the button producing `token`
    #[must_use]
    pub fn pressed(mut self, token: Option<Token>) -> Self {
        self.pressed = token;
        self
    }

    fn button_style(&self, btn: &KeypadButtonDef) -> Style {
        if self.pressed == Some(btn.token) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.token {
            Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
            Token::Operator(_) => Style::default().fg(Color::Yellow),
            Token::Equals => Style::default().fg(Color::Green),
            Token::Clear => Style::default().fg(Color::Red),
            Token::Backspace | Token::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, self.button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
