use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::dialogs::centered_rect;

/// 渲染帮助面板
pub fn render(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(76, 80, area);

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" 键盘快捷键帮助 (按 ESC 或 ? 关闭) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .style(Style::default().bg(Color::Black));

    f.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let activities_help = vec![
        section("活动视图"),
        Line::from(""),
        entry("j / k", "上下移动"),
        entry("Enter", "展开/收起描述"),
        entry("a", "新建活动"),
        entry("d", "删除高亮的活动"),
        entry("s", "切换排序字段 (名称/标签)"),
        entry("o", "切换排序方向"),
        Line::from(""),
        section("日历"),
        Line::from(""),
        entry("← / →", "前一天 / 后一天"),
        entry("↑ / ↓", "前一周 / 后一周"),
        entry("[ / ]", "上个月 / 下个月"),
        entry("t", "回到今天"),
    ];

    let board_help = vec![
        section("看板视图"),
        Line::from(""),
        entry("h / l", "左右切换泳道"),
        entry("j / k", "泳道内上下移动"),
        entry("a", "新建任务"),
        entry("e", "编辑高亮的任务"),
        entry("p", "调整优先级 (High→Medium→Low)"),
        entry("d", "删除高亮的任务"),
        Line::from(""),
        section("通用"),
        Line::from(""),
        entry("Tab", "切换视图"),
        entry("?", "帮助"),
        entry("q", "退出"),
    ];

    f.render_widget(Paragraph::new(activities_help), columns[0]);
    f.render_widget(Paragraph::new(board_help), columns[1]);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn entry<'a>(key: &'a str, description: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
