pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod tab_bar;
pub mod timer_pane;
pub mod todo_pane;

use crate::app::AppState;
use crate::domain::Screen;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::status_style;
use tab_bar::render_tab_bar;
use timer_pane::render_timer_pane;
use todo_pane::render_todo_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_tab_bar(f, app, layout.tabs_area);

    match app.screen {
        Screen::Timer => render_timer_pane(f, app, layout.content_area),
        Screen::ToDo => render_todo_pane(f, app, layout.content_area),
    }

    // Last announcement
    if let Some(message) = app.status.get() {
        let status = Paragraph::new(Span::styled(format!(" {}", message), status_style()));
        f.render_widget(status, layout.status_area);
    }

    render_input_form(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DurationPicker;
    use crate::notifications::{Notifier, StatusLine, TerminalNotifier};
    use ratatui::{backend::TestBackend, Terminal};
    use std::rc::Rc;
    use std::time::Instant;

    fn app() -> AppState {
        let status = StatusLine::new();
        let notifier: Rc<dyn Notifier> = Rc::new(TerminalNotifier::new(status.clone(), false, false));
        AppState::new(DurationPicker::default(), notifier, status)
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_timer_screen() {
        let mut app = app();
        let screen = draw(&app);
        assert!(screen.contains("00:00:00"));
        assert!(screen.contains("15 min"));
        assert!(screen.contains("Start"));

        app.timer_primary(Instant::now());
        let screen = draw(&app);
        assert!(screen.contains("00:15:00"));
        assert!(screen.contains("Pause"));
        assert!(!screen.contains("15 min"));
    }

    #[test]
    fn test_render_todo_screen_and_status() {
        let mut app = app();
        app.select_screen(Screen::ToDo);
        app.tasks.add("Buy milk");
        app.tasks.add("Walk dog");
        let id = app.tasks.get(0).unwrap().id;
        app.tasks.toggle_completion(id);

        let screen = draw(&app);
        assert!(screen.contains("To Do (1/2)"));
        assert!(screen.contains("[x] Buy milk"));
        assert!(screen.contains("[ ] Walk dog"));
        assert!(screen.contains("Selected screen: To Do"));
    }

    #[test]
    fn test_render_input_form() {
        let mut app = app();
        app.select_screen(Screen::ToDo);
        app.start_add_task();
        app.input_add_char('h');
        app.input_add_char('i');

        let screen = draw(&app);
        assert!(screen.contains("Add a new task"));
        assert!(screen.contains("> hi"));
    }
}
