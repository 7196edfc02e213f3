/// 应用 UI 状态持久化
///
/// 退出时保存视图、排序条件和选中日期，下次启动恢复。
/// 尽力而为：读写失败不影响启动和退出。
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::{App, View};
use crate::models::{SortCriteria, SortOrder};

/// 应用状态（用于持久化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// 当前视图
    pub view: View,
    /// 活动列表排序字段
    pub sort_criteria: SortCriteria,
    /// 活动列表排序方向
    pub sort_order: SortOrder,
    /// 日历选中的日期
    pub selected_date: NaiveDate,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Activities,
            sort_criteria: SortCriteria::Name,
            sort_order: SortOrder::Asc,
            selected_date: Utc::now().date_naive(),
        }
    }
}

/// 获取状态文件路径
/// All platforms: ~/.tasktrax/state.json
fn get_state_file_path() -> PathBuf {
    crate::config::app_dir().join("state.json")
}

/// 从应用中提取状态
pub fn extract_state(app: &App) -> AppState {
    AppState {
        view: app.view,
        sort_criteria: app.activities.sort_criteria,
        sort_order: app.activities.sort_order,
        selected_date: app.selected_date,
    }
}

/// 保存状态到文件
pub fn save_state(state: &AppState) -> Result<()> {
    let state_path = get_state_file_path();

    // 确保目录存在
    if let Some(parent) = state_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(state_path, json)?;

    Ok(())
}

/// 从文件加载状态
pub fn load_state() -> Result<AppState> {
    let state_path = get_state_file_path();

    if !state_path.exists() {
        return Ok(AppState::default());
    }

    let content = std::fs::read_to_string(state_path)?;
    let state: AppState = serde_json::from_str(&content)?;

    Ok(state)
}

/// 应用状态到应用
pub fn apply_state(app: &mut App, state: AppState) {
    app.view = state.view;
    app.activities.sort_criteria = state.sort_criteria;
    app.activities.sort_order = state.sort_order;
    app.selected_date = state.selected_date;
}
