use serde::{Deserialize, Serialize};

/// 看板任务优先级（三条固定泳道）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// 泳道顺序（从左到右）
    pub const LANES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// 轮转到下一个优先级（High → Medium → Low → High）
    pub fn next(&self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    /// 轮转到上一个优先级
    pub fn prev(&self) -> Priority {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

/// 看板任务
///
/// `id` 由存储在创建或加载时分配，用于选中/编辑/删除的定位，
/// 不参与持久化——blob 中只保存 `text` 和 `priority`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTask {
    #[serde(skip)]
    pub id: u64,
    pub text: String,
    pub priority: Priority,
}
