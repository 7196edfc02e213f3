use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 活动任务状态
///
/// 状态从固定的 4 元循环中轮转分配（见 [`TaskStatus::CYCLE`]），
/// 与任务内容和时间无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Upcoming,
    Overdue,
    Canceled,
    Done,
}

impl TaskStatus {
    /// 状态轮转顺序
    pub const CYCLE: [TaskStatus; 4] = [
        TaskStatus::Upcoming,
        TaskStatus::Overdue,
        TaskStatus::Canceled,
        TaskStatus::Done,
    ];

    /// 状态字母标识
    pub fn letter(&self) -> &'static str {
        match self {
            TaskStatus::Upcoming => "U",
            TaskStatus::Overdue => "O",
            TaskStatus::Canceled => "C",
            TaskStatus::Done => "D",
        }
    }
}

/// 按日期分组的活动任务
#[derive(Debug, Clone)]
pub struct ActivityTask {
    /// 由存储在插入时分配的稳定 id（展开状态等按 id 记录，不按位置）
    pub id: u64,
    pub name: String,
    pub description: String,
    /// 优先级标签（"1".."5"，低→紧急），按字符串而非数字排序
    pub tag: String,
    pub status: TaskStatus,
    /// 插入时间
    pub time: DateTime<Utc>,
}

/// 优先级标签等级（标签值 → 显示名）
pub const TAG_LEVELS: [(&str, &str); 5] = [
    ("1", "Low"),
    ("2", "Medium"),
    ("3", "High"),
    ("4", "Very High"),
    ("5", "Urgent"),
];

/// 标签的显示名
pub fn tag_label(tag: &str) -> &'static str {
    TAG_LEVELS
        .iter()
        .find(|(value, _)| *value == tag)
        .map(|(_, label)| *label)
        .unwrap_or("?")
}

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortCriteria {
    Name,
    Tag,
}

impl SortCriteria {
    pub fn toggle(&self) -> Self {
        match self {
            SortCriteria::Name => SortCriteria::Tag,
            SortCriteria::Tag => SortCriteria::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortCriteria::Name => "name",
            SortCriteria::Tag => "tag",
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}
