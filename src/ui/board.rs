use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::dialogs::priority_color;
use crate::app::App;
use crate::models::{BoardTask, Priority};

/// 渲染看板视图（三条优先级泳道）
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (idx, priority) in Priority::LANES.iter().enumerate() {
        let tasks = app.board.tasks_by_priority(*priority);
        render_lane(f, columns[idx], *priority, &tasks, idx, app);
    }
}

/// 渲染单条泳道
fn render_lane(
    f: &mut Frame,
    area: Rect,
    priority: Priority,
    tasks: &[&BoardTask],
    lane_idx: usize,
    app: &App,
) {
    let is_lane_focused = app.lane == lane_idx;

    // 简洁配色：聚焦=白色，非聚焦=灰色
    let (border_color, title_style) = if is_lane_focused {
        (
            Color::White,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        (Color::DarkGray, Style::default().fg(Color::Gray))
    };

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = is_lane_focused && i == app.lane_cursor;

            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(41, 98, 218))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let selection_indicator = if is_selected {
                Span::styled("▶ ", Style::default().fg(Color::White))
            } else {
                Span::raw("  ")
            };

            ListItem::new(Line::from(vec![
                Span::raw(" "),
                selection_indicator,
                Span::styled("● ", Style::default().fg(priority_color(task.priority))),
                Span::raw(task.text.clone()),
                Span::raw(" "),
            ]))
            .style(style)
        })
        .collect();

    let title_with_count = format!(" {} ({}) ", priority.label(), tasks.len());

    let list = List::new(items).block(
        Block::default()
            .title(title_with_count)
            .title_alignment(ratatui::layout::Alignment::Center)
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .border_type(ratatui::widgets::BorderType::Rounded),
    );

    f.render_widget(list, area);
}
