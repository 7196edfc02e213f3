use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use crate::models::{Priority, tag_label};
use crate::store::{BoardForm, NewTaskForm};

/// 新建活动对话框的聚焦字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Name,
    Description,
    Tag,
}

/// 对话框类型
pub enum DialogType {
    /// 新建活动（名称 / 描述 / 优先级标签）
    AddActivity {
        focus: ActivityField,
        name: String,
        tag: String,
        description: TextArea<'static>,
    },
    /// 新建看板任务（文本 / 优先级）
    AddBoardTask { text: String, priority: Priority },
    /// 编辑看板任务文本
    EditBoardTask { text: String },
}

impl DialogType {
    /// 从表单状态构建新建活动对话框
    pub fn add_activity(form: &NewTaskForm) -> Self {
        let mut description = if form.description.is_empty() {
            TextArea::default()
        } else {
            TextArea::from(form.description.lines().map(|s| s.to_string()))
        };
        description.set_cursor_line_style(Style::default());
        description.set_cursor_style(Style::default().bg(Color::White).fg(Color::Black));

        Self::AddActivity {
            focus: ActivityField::Name,
            name: form.name.clone(),
            tag: form.tag.clone(),
            description,
        }
    }

    /// 从表单状态构建新建看板任务对话框
    pub fn add_board_task(form: &BoardForm) -> Self {
        Self::AddBoardTask {
            text: form.text.clone(),
            priority: form.priority,
        }
    }
}

/// 渲染居中的对话框
pub fn render_dialog(f: &mut Frame, dialog: &DialogType) {
    match dialog {
        DialogType::AddActivity {
            focus,
            name,
            tag,
            description,
        } => render_add_activity(f, *focus, name, tag, description),
        DialogType::AddBoardTask { text, priority } => render_add_board_task(f, text, *priority),
        DialogType::EditBoardTask { text } => render_edit_board_task(f, text),
    }
}

fn render_add_activity(
    f: &mut Frame,
    focus: ActivityField,
    name: &str,
    tag: &str,
    description: &TextArea<'static>,
) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" 新建活动 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(ratatui::widgets::BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 名称
            Constraint::Min(5),    // 描述
            Constraint::Length(3), // 优先级标签
            Constraint::Length(1), // 操作提示
        ])
        .split(inner);

    render_text_field(f, chunks[0], " 名称 ", name, focus == ActivityField::Name);

    // 描述字段用 textarea 渲染，聚焦时边框高亮
    let desc_block = Block::default()
        .title(" 描述 ")
        .borders(Borders::ALL)
        .border_style(field_border(focus == ActivityField::Description));
    let desc_inner = desc_block.inner(chunks[1]);
    f.render_widget(desc_block, chunks[1]);
    f.render_widget(description, desc_inner);

    let tag_display = format!("{} - {}", tag, tag_label(tag));
    render_text_field(
        f,
        chunks[2],
        " 优先级 (1-5) ",
        &tag_display,
        focus == ActivityField::Tag,
    );

    let hint = Line::from(Span::styled(
        " Tab 切换字段 · Enter 提交 · Esc 取消 ",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[3]);
}

fn render_add_board_task(f: &mut Frame, text: &str, priority: Priority) {
    let area = centered_rect(50, 35, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" 新建任务 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(ratatui::widgets::BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 文本
            Constraint::Length(3), // 优先级
            Constraint::Length(1), // 操作提示
        ])
        .split(inner);

    render_text_field(f, chunks[0], " 任务 ", text, true);

    let priority_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(priority_color(priority))),
        Span::raw(priority.label()),
        Span::styled("  (↑/↓ 切换)", Style::default().fg(Color::DarkGray)),
    ]);
    let priority_widget = Paragraph::new(priority_line).block(
        Block::default()
            .title(" 优先级 ")
            .borders(Borders::ALL)
            .border_style(field_border(false)),
    );
    f.render_widget(priority_widget, chunks[1]);

    let hint = Line::from(Span::styled(
        " Enter 提交 · Esc 取消 ",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);
}

fn render_edit_board_task(f: &mut Frame, text: &str) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" 编辑任务 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(ratatui::widgets::BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    render_text_field(f, chunks[0], " 任务 ", text, true);

    let hint = Line::from(Span::styled(
        " Enter 保存 · Esc 取消 ",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[1]);
}

/// 渲染单行文本字段，聚焦时显示光标块
fn render_text_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(field_border(focused)),
    );
    f.render_widget(widget, area);
}

fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// 泳道优先级配色
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Blue,
    }
}

/// 创建居中的矩形区域
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
