use chrono::{Datelike, Months, NaiveDate, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// 渲染月历
///
/// 高亮选中的日期，今天加粗显示。周一为一周的第一天。
pub fn render(f: &mut Frame, area: Rect, selected: NaiveDate) {
    let today = Utc::now().date_naive();

    let block = Block::default()
        .title(format!(" {} ", selected.format("%B %Y")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_type(ratatui::widgets::BorderType::Rounded);

    let first = selected.with_day(1).unwrap_or(selected);
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            "Mo Tu We Th Fr Sa Su",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut week: Vec<Span> = Vec::new();
    for _ in 0..offset {
        week.push(Span::raw("   "));
    }

    for day in 1..=days_in_month(first) {
        let style = if day == selected.day() {
            Style::default()
                .bg(Color::Rgb(41, 98, 218))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if first.with_day(day) == Some(today) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        week.push(Span::styled(format!("{:>2} ", day), style));

        if (offset + day as usize) % 7 == 0 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←/→ 日  ↑/↓ 周  [/] 月  t 今天",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

/// 当月天数
fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}
