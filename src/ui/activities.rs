use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::calendar;
use crate::app::App;
use crate::models::TaskStatus;

/// 列表最多显示的任务数
pub const MAX_VISIBLE_TASKS: usize = 100;

/// 渲染活动视图（任务列表 + 月历）
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_task_list(f, chunks[0], app);
    calendar::render(f, chunks[1], app.selected_date);
}

fn render_task_list(f: &mut Frame, area: Rect, app: &App) {
    let key = app.date_key();
    let tasks = app.activities.tasks(&key);

    let title = format!(
        " {} 的活动 ({} / 共 {}) ",
        app.selected_date.format("%Y-%m-%d"),
        tasks.len(),
        app.activities.total_count()
    );
    let sort_indicator = format!(
        " 排序: {} {} (s/o 切换) ",
        app.activities.sort_criteria.label(),
        app.activities.sort_order.label()
    );

    let block = Block::default()
        .title(title)
        .title_alignment(ratatui::layout::Alignment::Center)
        .title_bottom(
            Line::from(Span::styled(sort_indicator, Style::default().fg(Color::DarkGray)))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .border_type(ratatui::widgets::BorderType::Rounded);

    if tasks.is_empty() {
        let empty = List::new([ListItem::new(Line::from(Span::styled(
            " 这一天还没有活动 - 按 a 新建 ",
            Style::default().fg(Color::Gray),
        )))])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .take(MAX_VISIBLE_TASKS)
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.activity_cursor;

            let selection_indicator = if is_selected {
                Span::styled("▶ ", Style::default().fg(Color::White))
            } else {
                Span::raw("  ")
            };

            let mut lines = vec![Line::from(vec![
                Span::raw(" "),
                selection_indicator,
                Span::styled(
                    format!("[{}] ", task.status.letter()),
                    Style::default().fg(status_color(task.status)),
                ),
                Span::raw(task.name.clone()),
                Span::styled(format!("  #{}", task.tag), Style::default().fg(Color::Magenta)),
                Span::styled(
                    format!("  {}", task.time.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];

            // 展开的任务显示描述
            if app.expanded.contains(&task.id) {
                if task.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "      (无描述)",
                        Style::default().fg(Color::DarkGray),
                    )));
                } else {
                    for desc_line in task.description.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("      {}", desc_line),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                }
            }

            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(41, 98, 218))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(lines).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// 状态字母配色
fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Upcoming => Color::Cyan,
        TaskStatus::Overdue => Color::Red,
        TaskStatus::Canceled => Color::DarkGray,
        TaskStatus::Done => Color::Green,
    }
}
