pub mod activities;
pub mod board;
pub mod calendar;
pub mod dialogs;
pub mod help;
mod statusbar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::app::{App, Mode, Notification, NotificationLevel, View};

/// 主渲染函数
pub fn render(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // 主内容区域
            Constraint::Length(1), // 状态栏
        ])
        .split(f.area());

    match app.view {
        View::Activities => activities::render(f, main_chunks[0], app),
        View::Board => board::render(f, main_chunks[0], app),
    }

    statusbar::render(f, main_chunks[1], app);

    // 渲染对话框（如果有）
    if let Some(dialog) = &app.dialog {
        dialogs::render_dialog(f, dialog);
    }

    // 渲染帮助面板（如果处于帮助模式）
    if app.mode == Mode::Help {
        help::render(f, f.area());
    }

    // 渲染通知横幅（如果有通知）
    if let Some(ref notification) = app.notification {
        render_notification(f, main_chunks[0], notification);
    }
}

/// 把通知画成主内容区底部的单行横幅，紧贴状态栏上方
fn render_notification(f: &mut Frame, area: Rect, notification: &Notification) {
    if area.height == 0 {
        return;
    }
    let banner = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let (accent, symbol) = match notification.level {
        NotificationLevel::Info => (Color::Blue, "i"),
        NotificationLevel::Success => (Color::Green, "+"),
        NotificationLevel::Warning => (Color::Yellow, "!"),
        NotificationLevel::Error => (Color::Red, "x"),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", symbol),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", notification.message),
            Style::default().fg(accent),
        ),
    ]);

    f.render_widget(Clear, banner);
    f.render_widget(Paragraph::new(line), banner);
}
