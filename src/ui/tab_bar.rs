use crate::app::AppState;
use crate::domain::Screen;
use crate::ui::styles::{border_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the screen selector
pub fn render_tab_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("{} {}", i + 1, screen.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .highlight_style(selected_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" ticklist ", title_style())),
        );

    f.render_widget(tabs, area);
}
