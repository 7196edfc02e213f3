use anyhow::Result;
use chrono::{NaiveDate, Utc};
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

use crate::models::Priority;
use crate::storage::FileBlobStore;
use crate::store::{ActivityStore, BoardStore, date_key};
use crate::ui::activities::MAX_VISIBLE_TASKS;
use crate::ui::dialogs::DialogType;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// 通知消息
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    /// 检查通知是否已过期（3秒后自动消失）
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= 3
    }
}

/// 视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// 活动视图 - 按日期的任务列表 + 月历
    Activities,
    /// 看板视图 - 三条优先级泳道
    Board,
}

impl View {
    pub fn toggle(&self) -> View {
        match self {
            View::Activities => View::Board,
            View::Board => View::Activities,
        }
    }
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 正常模式 - 导航和操作
    Normal,
    /// 对话框模式
    Dialog,
    /// 帮助模式 - 显示快捷键
    Help,
}

/// 应用状态
pub struct App {
    /// 当前模式
    pub mode: Mode,
    /// 当前视图
    pub view: View,
    /// 活动存储（日期 → 任务列表）
    pub activities: ActivityStore,
    /// 看板存储（三泳道，持久化）
    pub board: BoardStore,
    /// 日历选中的日期
    pub selected_date: NaiveDate,
    /// 活动列表中高亮的行（显示顺序索引）
    pub activity_cursor: usize,
    /// 展开描述的任务 id 集合（按 id 记录，重排后不会错位）
    pub expanded: HashSet<u64>,
    /// 看板聚焦的泳道（0=High 1=Medium 2=Low）
    pub lane: usize,
    /// 泳道内高亮的行
    pub lane_cursor: usize,
    /// 当前显示的对话框
    pub dialog: Option<DialogType>,
    /// 通知消息
    pub notification: Option<Notification>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Result<Self> {
        let config = crate::config::load_config()?;
        let data_path = crate::config::data_file_path(&config);
        let board = BoardStore::new(Box::new(FileBlobStore::new(data_path)));

        let mut app = Self {
            mode: Mode::Normal,
            view: View::Activities,
            activities: ActivityStore::new(),
            board,
            selected_date: Utc::now().date_naive(),
            activity_cursor: 0,
            expanded: HashSet::new(),
            lane: 0,
            lane_cursor: 0,
            dialog: None,
            notification: None,
        };

        if let Err(e) = app.board.load() {
            app.notify(NotificationLevel::Error, format!("加载任务数据失败: {}", e));
        }

        // 尝试恢复上次的 UI 状态
        if let Ok(state) = crate::state::load_state() {
            crate::state::apply_state(&mut app, state);
        }

        Ok(app)
    }

    /// 显示通知
    pub fn notify(&mut self, level: NotificationLevel, message: String) {
        self.notification = Some(Notification {
            message,
            level,
            created_at: Instant::now(),
        });
    }

    /// 当前选中日期的日期键
    pub fn date_key(&self) -> String {
        date_key(self.selected_date)
    }

    /// 每帧渲染前的准备：重排当前日期的任务、收紧游标、清理过期通知
    ///
    /// 排序在每次渲染前重新计算，保证排序条件变化立即反映到列表，
    /// 且存储顺序始终等于显示顺序。
    pub fn prepare_frame(&mut self) {
        let key = self.date_key();
        self.activities.sort_tasks(&key);

        let visible = self.activities.tasks(&key).len().min(MAX_VISIBLE_TASKS);
        if self.activity_cursor >= visible {
            self.activity_cursor = visible.saturating_sub(1);
        }

        let lane_len = self.board.tasks_by_priority(Priority::LANES[self.lane]).len();
        if self.lane_cursor >= lane_len {
            self.lane_cursor = lane_len.saturating_sub(1);
        }

        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    /// 看板当前泳道中高亮任务的 id
    pub fn highlighted_board_task(&self) -> Option<u64> {
        self.board
            .tasks_by_priority(Priority::LANES[self.lane])
            .get(self.lane_cursor)
            .map(|t| t.id)
    }

    /// 处理键盘输入
    /// 返回 false 表示应该退出应用
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        crate::input::keyboard::handle_key_input(self, key)
    }
}
