//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::NumberFormat;

/// Window title
pub const TITLE: &str = " tonecalc ";

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("%", "Percent"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Erase"),
    ("Esc c", "Clear"),
    ("Click", "Press button"),
    ("q", "Quit"),
];

/// Where each panel goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Two-line display panel
    pub display: Rect,
    /// Settings line under the display
    pub status: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl UiLayout {
    /// Splits the full terminal area into panels
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),
                Constraint::Length(24),
                Constraint::Length(22),
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        Self {
            display: main[0],
            status: main[1],
            keypad: columns[1],
            help: columns[2],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();
        let result_style = if self.app.state().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                display.expression.as_str(),
                Style::default().fg(Color::Gray),
            ))
            .right_aligned(),
            Line::from(Span::styled(display.result.as_str(), result_style)).right_aligned(),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let config = self.app.config();
        let format = match config.number_format {
            NumberFormat::Plain => "plain",
            NumberFormat::Grouped => "grouped",
        };
        let sound = if config.sound { "on" } else { "off" };

        Paragraph::new(Line::from(vec![
            Span::styled("Format ", Style::default().fg(Color::DarkGray)),
            Span::styled(format, Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled("Sound ", Style::default().fg(Color::DarkGray)),
            Span::styled(sound, Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::new(area);
        self.render_display(layout.display, buf);
        self.render_status(layout.status, buf);
        KeypadWidget::new(self.app.keypad())
            .pressed(self.app.last_pressed())
            .render(layout.keypad, buf);
        Self::render_help(layout.help, buf);
    }
}
