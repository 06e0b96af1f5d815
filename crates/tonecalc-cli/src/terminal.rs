//! Interactive terminal calculator

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tonecalc::config::CalculatorConfig;
use tonecalc::tui::{render, CalculatorApp, UiLayout};
use tracing::{debug, info, warn};

use crate::bell::TerminalBell;
use crate::error::{CliError, CliResult};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the calculator until the user quits
pub fn run_tui(config: CalculatorConfig) -> CliResult<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::terminal(
            "the interactive calculator needs a terminal; use `tonecalc run` for scripts",
        ));
    }

    enable_raw_mode()?;
    let restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = CalculatorApp::with_config(config, Box::new(TerminalBell::stdout()));
    info!(?config, "terminal calculator started");
    let result = run_app(&mut terminal, &mut app);

    terminal.show_cursor()?;
    drop(restore);

    info!(
        evaluations = app.calculator().evaluations(),
        "terminal calculator closed"
    );
    result
}

/// Runs a restore step once when dropped
///
/// Created right after raw mode is enabled, so an error from any later
/// setup or drawing call still hands the shell back in a usable state.
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        if event::poll(POLL_INTERVAL)? {
            let size = terminal.size()?;
            handle_event(app, &event::read()?, Rect::new(0, 0, size.width, size.height));
        }
    }
    Ok(())
}

/// Routes one terminal event to the app
///
/// `screen` is the full terminal area, used to locate the keypad for mouse
/// clicks.
pub fn handle_event(app: &mut CalculatorApp, event: &Event, screen: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(*key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let keypad = UiLayout::new(screen).keypad;
            if let Some(token) = app.handle_click(keypad, mouse.column, mouse.row) {
                debug!(%token, "keypad click");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use std::cell::Cell;
    use tonecalc::core::Token;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16, kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn cell_of(app: &CalculatorApp, token: Token) -> (u16, u16) {
        let keypad = UiLayout::new(SCREEN).keypad;
        (keypad.x..keypad.right())
            .flat_map(|x| (keypad.y..keypad.bottom()).map(move |y| (x, y)))
            .find(|&(x, y)| {
                tonecalc::tui::hit_test(app.keypad(), keypad, x, y) == Some(token)
            })
            .unwrap()
    }

    // ===== Restore guard =====

    fn failing_setup() -> io::Result<()> {
        Err(io::Error::other("backend unavailable"))
    }

    fn setup_then_fail(restored: &Cell<u32>) -> CliResult<()> {
        let _restore = RestoreGuard::new(|| {
            restored.set(restored.get() + 1);
            Ok(())
        });
        failing_setup()?;
        Ok(())
    }

    #[test]
    fn test_restore_runs_on_early_return() {
        let restored = Cell::new(0);
        assert!(setup_then_fail(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_once_on_explicit_drop() {
        let restored = Cell::new(0);
        let guard = RestoreGuard::new(|| {
            restored.set(restored.get() + 1);
            Ok(())
        });
        assert_eq!(restored.get(), 0);
        drop(guard);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_failure_does_not_panic() {
        let restored = Cell::new(false);
        drop(RestoreGuard::new(|| {
            restored.set(true);
            Err(io::Error::other("not a tty"))
        }));
        assert!(restored.get());
    }

    #[test]
    fn test_restore_runs_during_panic() {
        let restored = Cell::new(0);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _restore = RestoreGuard::new(|| {
                restored.set(restored.get() + 1);
                Ok(())
            });
            panic!("draw failed");
        }));
        assert!(outcome.is_err());
        assert_eq!(restored.get(), 1);
    }

    // ===== Events =====

    #[test]
    fn test_keys_drive_calculator() {
        let mut app = CalculatorApp::new();
        for code in [
            KeyCode::Char('8'),
            KeyCode::Char('*'),
            KeyCode::Char('5'),
            KeyCode::Enter,
        ] {
            handle_event(&mut app, &key(code), SCREEN);
        }
        assert_eq!(app.display().result, "40");
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = CalculatorApp::new();
        let mut release = KeyEvent::new(KeyCode::Char('8'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_event(&mut app, &Event::Key(release), SCREEN);
        assert_eq!(app.state().input, "0");
    }

    #[test]
    fn test_quit_key() {
        let mut app = CalculatorApp::new();
        handle_event(&mut app, &key(KeyCode::Char('q')), SCREEN);
        assert!(app.should_quit());
    }

    #[test]
    fn test_left_click_presses_button() {
        let mut app = CalculatorApp::new();
        let (x, y) = cell_of(&app, Token::Digit(7));
        handle_event(&mut app, &click(x, y, MouseEventKind::Down(MouseButton::Left)), SCREEN);
        assert_eq!(app.state().input, "7");
        assert_eq!(app.last_pressed(), Some(Token::Digit(7)));
    }

    #[test]
    fn test_right_click_ignored() {
        let mut app = CalculatorApp::new();
        let (x, y) = cell_of(&app, Token::Digit(7));
        handle_event(&mut app, &click(x, y, MouseEventKind::Down(MouseButton::Right)), SCREEN);
        assert_eq!(app.state().input, "0");
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        handle_event(&mut app, &click(0, 0, MouseEventKind::Down(MouseButton::Left)), SCREEN);
        assert_eq!(app.state().input, "0");
        assert_eq!(app.last_pressed(), None);
    }

    #[test]
    fn test_resize_ignored() {
        let mut app = CalculatorApp::new();
        handle_event(&mut app, &Event::Resize(100, 40), SCREEN);
        assert_eq!(app.state().input, "0");
    }
}
