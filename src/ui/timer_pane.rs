use crate::app::AppState;
use crate::domain::{PickerField, RunState};
use crate::ui::styles::{
    border_style, clock_style, default_style, focus_style, hint_style, idle_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn state_style(state: RunState) -> Style {
    match state {
        RunState::Running => running_style(),
        RunState::Paused => paused_style(),
        RunState::Idle => idle_style(),
    }
}

/// Picker row: "[ 0 hours ]  [ 15 min ]  [ 0 sec ]"
fn picker_line(app: &AppState) -> Line<'static> {
    let fields = [PickerField::Hours, PickerField::Minutes, PickerField::Seconds];
    let mut spans = Vec::new();

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let text = format!("[ {:>2} {} ]", app.picker.value(*field), field.unit());
        let style = if *field == app.picker.focus {
            focus_style()
        } else {
            default_style()
        };
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}

/// Render the countdown screen
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let state = app.timer.run_state();
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(app.timer.format_display(), clock_style())));
    lines.push(Line::from(Span::styled(
        format!("[{}]", state.to_tag()),
        state_style(state),
    )));
    lines.push(Line::raw(""));

    // Picker only while no countdown is in flight
    if app.picker_editable() {
        lines.push(picker_line(app));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter] ", hint_style()),
        Span::styled(state.primary_action(), state_style(state)),
        Span::raw("    "),
        Span::styled("[r] ", hint_style()),
        Span::raw("Reset"),
    ]));

    if let Some(finished) = app.timer.finished_at() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("Finished at {}", finished.format("%H:%M:%S")),
            hint_style(),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
