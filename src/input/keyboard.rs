use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use chrono::{Days, Months, Utc};

use crate::app::{App, Mode, NotificationLevel, View};
use crate::models::{Priority, TAG_LEVELS};
use crate::ui::activities::MAX_VISIBLE_TASKS;
use crate::ui::dialogs::{ActivityField, DialogType};

/// 处理键盘输入
/// 返回 false 表示应该退出应用
pub fn handle_key_input(app: &mut App, key: KeyEvent) -> bool {
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Dialog => handle_dialog_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// 处理正常模式的按键
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
            return true;
        }
        KeyCode::Tab => {
            app.view = app.view.toggle();
            return true;
        }
        _ => {}
    }

    match app.view {
        View::Activities => handle_activities_keys(app, key),
        View::Board => handle_board_keys(app, key),
    }

    true
}

/// 活动视图的按键
fn handle_activities_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        // 列表导航
        KeyCode::Char('j') => {
            let visible = app
                .activities
                .tasks(&app.date_key())
                .len()
                .min(MAX_VISIBLE_TASKS);
            if app.activity_cursor + 1 < visible {
                app.activity_cursor += 1;
            }
        }
        KeyCode::Char('k') => {
            app.activity_cursor = app.activity_cursor.saturating_sub(1);
        }
        // 展开/收起高亮任务的描述（按 id 记录）
        KeyCode::Enter | KeyCode::Char(' ') => {
            let date_key = app.date_key();
            if let Some(task) = app.activities.tasks(&date_key).get(app.activity_cursor) {
                let id = task.id;
                if !app.expanded.remove(&id) {
                    app.expanded.insert(id);
                }
            }
        }
        // 删除高亮的任务（显示顺序索引，越界静默忽略）
        KeyCode::Char('d') => {
            let date_key = app.date_key();
            // 展开集合里对应的 id 一并清掉，避免残留
            if let Some(task) = app.activities.tasks(&date_key).get(app.activity_cursor) {
                let id = task.id;
                app.expanded.remove(&id);
            }
            app.activities.remove_task(&date_key, app.activity_cursor);
        }
        // 排序控制
        KeyCode::Char('s') => {
            app.activities.sort_criteria = app.activities.sort_criteria.toggle();
        }
        KeyCode::Char('o') => {
            app.activities.sort_order = app.activities.sort_order.toggle();
        }
        // 新建活动对话框
        KeyCode::Char('a') => {
            app.dialog = Some(DialogType::add_activity(&app.activities.form));
            app.mode = Mode::Dialog;
        }
        // 日历导航
        KeyCode::Left => shift_days(app, -1),
        KeyCode::Right => shift_days(app, 1),
        KeyCode::Up => shift_days(app, -7),
        KeyCode::Down => shift_days(app, 7),
        KeyCode::Char('[') => shift_months(app, -1),
        KeyCode::Char(']') => shift_months(app, 1),
        KeyCode::Char('t') => {
            app.selected_date = Utc::now().date_naive();
            app.activity_cursor = 0;
        }
        _ => {}
    }
}

/// 看板视图的按键
fn handle_board_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        // 泳道导航
        KeyCode::Char('h') | KeyCode::Left => {
            app.lane = (app.lane + Priority::LANES.len() - 1) % Priority::LANES.len();
            app.lane_cursor = 0;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.lane = (app.lane + 1) % Priority::LANES.len();
            app.lane_cursor = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let lane_len = app.board.tasks_by_priority(Priority::LANES[app.lane]).len();
            if app.lane_cursor + 1 < lane_len {
                app.lane_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.lane_cursor = app.lane_cursor.saturating_sub(1);
        }
        // 新建任务对话框
        KeyCode::Char('a') => {
            app.dialog = Some(DialogType::add_board_task(&app.board.form));
            app.mode = Mode::Dialog;
        }
        // 编辑高亮的任务：先选中，再打开编辑对话框
        KeyCode::Char('e') => {
            if let Some(id) = app.highlighted_board_task() {
                app.board.select(id);
                let text = app
                    .board
                    .selected()
                    .map(|t| t.text.clone())
                    .unwrap_or_default();
                app.dialog = Some(DialogType::EditBoardTask { text });
                app.mode = Mode::Dialog;
            }
        }
        // 调整高亮任务的优先级（轮转到下一档）
        KeyCode::Char('p') => {
            if let Some(id) = app.highlighted_board_task() {
                app.board.select(id);
                let next = app.board.selected().map(|t| t.priority.next());
                if let Some(next) = next
                    && let Err(e) = app.board.change_priority(next)
                {
                    app.notify(NotificationLevel::Error, format!("保存任务数据失败: {}", e));
                }
            }
        }
        // 删除高亮的任务
        KeyCode::Char('d') => {
            if let Some(id) = app.highlighted_board_task() {
                app.board.select(id);
                if let Err(e) = app.board.delete_task() {
                    app.notify(NotificationLevel::Error, format!("保存任务数据失败: {}", e));
                }
            }
        }
        _ => {}
    }
}

/// 处理对话框模式的按键
fn handle_dialog_mode(app: &mut App, key: KeyEvent) -> bool {
    // Esc 统一取消
    if key.code == KeyCode::Esc {
        app.dialog = None;
        app.mode = Mode::Normal;
        return true;
    }

    // Ctrl+S 在任何字段都提交
    let mut submit =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s');

    if !submit && let Some(dialog) = &mut app.dialog {
        match dialog {
            DialogType::AddActivity {
                focus,
                name,
                tag,
                description,
            } => match focus {
                ActivityField::Name => match key.code {
                    KeyCode::Enter => submit = true,
                    KeyCode::Tab => *focus = ActivityField::Description,
                    KeyCode::BackTab => *focus = ActivityField::Tag,
                    KeyCode::Backspace => {
                        name.pop();
                    }
                    KeyCode::Char(c) => name.push(c),
                    _ => {}
                },
                ActivityField::Description => match key.code {
                    KeyCode::Tab => *focus = ActivityField::Tag,
                    KeyCode::BackTab => *focus = ActivityField::Name,
                    _ => {
                        description.input(key);
                    }
                },
                ActivityField::Tag => match key.code {
                    KeyCode::Enter => submit = true,
                    KeyCode::Tab => *focus = ActivityField::Name,
                    KeyCode::BackTab => *focus = ActivityField::Description,
                    KeyCode::Char(c @ '1'..='5') => *tag = c.to_string(),
                    KeyCode::Left => shift_tag(tag, -1),
                    KeyCode::Right => shift_tag(tag, 1),
                    _ => {}
                },
            },
            DialogType::AddBoardTask { text, priority } => match key.code {
                KeyCode::Enter => submit = true,
                KeyCode::Up => *priority = priority.prev(),
                KeyCode::Down => *priority = priority.next(),
                KeyCode::Backspace => {
                    text.pop();
                }
                KeyCode::Char(c) => text.push(c),
                _ => {}
            },
            DialogType::EditBoardTask { text } => match key.code {
                KeyCode::Enter => submit = true,
                KeyCode::Backspace => {
                    text.pop();
                }
                KeyCode::Char(c) => text.push(c),
                _ => {}
            },
        }
    }

    if submit {
        submit_dialog(app);
    }
    true
}

/// 提交当前对话框
///
/// 对话框字段先同步到对应存储的表单，再走存储的提交路径；
/// 名称/文本为空时提交被静默拒绝，对话框保持打开。
fn submit_dialog(app: &mut App) {
    enum Submission {
        Activity {
            name: String,
            tag: String,
            description: String,
        },
        BoardAdd {
            text: String,
            priority: Priority,
        },
        BoardEdit {
            text: String,
        },
    }

    let submission = match &app.dialog {
        Some(DialogType::AddActivity {
            name,
            tag,
            description,
            ..
        }) => Submission::Activity {
            name: name.clone(),
            tag: tag.clone(),
            description: description.lines().join("\n"),
        },
        Some(DialogType::AddBoardTask { text, priority }) => Submission::BoardAdd {
            text: text.clone(),
            priority: *priority,
        },
        Some(DialogType::EditBoardTask { text }) => Submission::BoardEdit { text: text.clone() },
        None => return,
    };

    let close = match submission {
        Submission::Activity {
            name,
            tag,
            description,
        } => {
            app.activities.form.name = name;
            app.activities.form.tag = tag;
            app.activities.form.description = description;
            let date_key = app.date_key();
            app.activities.add_task(&date_key)
        }
        Submission::BoardAdd { text, priority } => {
            app.board.form.text = text;
            app.board.form.priority = priority;
            match app.board.add_task() {
                Ok(added) => added,
                Err(e) => {
                    app.notify(NotificationLevel::Error, format!("保存任务数据失败: {}", e));
                    true
                }
            }
        }
        Submission::BoardEdit { text } => {
            if let Err(e) = app.board.edit_task(&text) {
                app.notify(NotificationLevel::Error, format!("保存任务数据失败: {}", e));
            }
            true
        }
    };

    if close {
        app.dialog = None;
        app.mode = Mode::Normal;
    }
}

/// 处理帮助模式的按键
fn handle_help_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
    true
}

/// 日历前后移动若干天
fn shift_days(app: &mut App, days: i64) {
    let shifted = if days >= 0 {
        app.selected_date.checked_add_days(Days::new(days as u64))
    } else {
        app.selected_date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    if let Some(date) = shifted {
        app.selected_date = date;
        app.activity_cursor = 0;
    }
}

/// 日历前后移动若干月
fn shift_months(app: &mut App, months: i32) {
    let shifted = if months >= 0 {
        app.selected_date.checked_add_months(Months::new(months as u32))
    } else {
        app.selected_date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    if let Some(date) = shifted {
        app.selected_date = date;
        app.activity_cursor = 0;
    }
}

/// 在 1..5 范围内移动优先级标签
fn shift_tag(tag: &mut String, delta: i32) {
    if let Some(pos) = TAG_LEVELS.iter().position(|(value, _)| *value == tag.as_str()) {
        let next = pos as i32 + delta;
        if (0..TAG_LEVELS.len() as i32).contains(&next) {
            *tag = TAG_LEVELS[next as usize].0.to_string();
        }
    }
}
