use crate::app::AppState;
use crate::domain::TaskRecord;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, marked_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Create a line for a task row
fn create_task_line(task: &TaskRecord, marked: bool) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(if marked {
        Span::styled("* ", marked_style())
    } else {
        Span::raw("  ")
    });

    let (checkbox, title_style) = if task.is_completed {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };
    spans.push(Span::raw(checkbox));
    spans.push(Span::styled(task.title.clone(), title_style));
    spans.push(Span::styled(
        format!("  {}", task.created_at.format("%H:%M")),
        hint_style(),
    ));

    Line::from(spans)
}

/// Render the "To Do" list pane
pub fn render_todo_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.tasks.tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  Nothing to do. Press 'a' to add a task.",
            hint_style(),
        )))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(i, task)| ListItem::new(create_task_line(task, app.marked.contains(&i))))
            .collect()
    };

    let title = format!(
        " To Do ({}/{}) ",
        app.tasks.completed_count(),
        app.tasks.len()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(Some(app.selected_index));
    }

    f.render_stateful_widget(list, area, &mut state);
}
