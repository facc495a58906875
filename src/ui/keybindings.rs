use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current screen and mode
pub fn hints(app: &AppState) -> Vec<&'static str> {
    if app.ui_mode == UiMode::AddingTask {
        return vec!["type title   ", "Enter add   ", "Esc cancel"];
    }

    let mut hints = vec![" Tab/1/2 screen   "];
    match app.screen {
        Screen::Timer => {
            if app.picker_editable() {
                hints.push("←/→ field   ");
                hints.push("↑/↓ adjust   ");
            }
            hints.push("Enter start/pause   ");
            hints.push("s stop   ");
            hints.push("r reset   ");
        }
        Screen::ToDo => {
            hints.push("↑/↓ select   ");
            hints.push("Enter check   ");
            hints.push("a add   ");
            hints.push("x delete   ");
            hints.push("v mark   ");
            hints.push("X delete marked   ");
        }
    }
    hints.push("q quit");
    hints
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(hints(app).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style());
    f.render_widget(paragraph, area);
}
