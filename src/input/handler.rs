use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask => {
            handle_input_mode(app, key);
            false
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        // Screen selection
        KeyCode::Tab | KeyCode::BackTab => app.next_screen(),
        KeyCode::Char('1') => app.select_screen(Screen::Timer),
        KeyCode::Char('2') => app.select_screen(Screen::ToDo),

        _ => match app.screen {
            Screen::Timer => handle_timer_keys(app, key, now),
            Screen::ToDo => handle_todo_keys(app, key),
        },
    }
    false
}

fn handle_timer_keys(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        // Picker
        KeyCode::Left => app.picker_left(),
        KeyCode::Right => app.picker_right(),
        KeyCode::Up => app.picker_up(),
        KeyCode::Down => app.picker_down(),

        // Start / pause / resume
        KeyCode::Enter | KeyCode::Char(' ') => app.timer_primary(now),

        KeyCode::Char('s') | KeyCode::Char('S') => app.timer_stop(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.timer_reset(),

        _ => {}
    }
}

fn handle_todo_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        // Delete selected / marked
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('v') | KeyCode::Char('V') => app.toggle_mark(),
        KeyCode::Char('X') => app.delete_marked(),

        _ => {}
    }
}

/// Handle keys while typing a new task title
fn handle_input_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
}
