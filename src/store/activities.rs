use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::models::{ActivityTask, SortCriteria, SortOrder, TaskStatus};

/// 日期键：`YYYY-MM-DD`（UTC 截断）
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 新建活动的表单状态
#[derive(Debug, Clone)]
pub struct NewTaskForm {
    pub name: String,
    pub description: String,
    pub tag: String,
}

impl Default for NewTaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            tag: "1".to_string(),
        }
    }
}

/// 日期 → 任务列表的活动存储
///
/// 只保存在内存中，生命周期与进程相同。日期桶在首次插入时惰性创建，
/// 之后不会被删除（即使已清空）。
pub struct ActivityStore {
    activities: BTreeMap<String, Vec<ActivityTask>>,
    /// 状态轮转计数：跨所有日期对每次成功插入递增，模 4 取状态
    status_cycle_index: usize,
    next_id: u64,
    /// 新建任务表单，成功提交后重置
    pub form: NewTaskForm,
    pub sort_criteria: SortCriteria,
    pub sort_order: SortOrder,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self {
            activities: BTreeMap::new(),
            status_cycle_index: 0,
            next_id: 1,
            form: NewTaskForm::default(),
            sort_criteria: SortCriteria::Name,
            sort_order: SortOrder::Asc,
        }
    }

    /// 把表单中的任务添加到指定日期
    ///
    /// 名称去除空白后为空时静默拒绝（表单保持原样）。成功时为任务
    /// 打上当前时间戳，按轮转顺序分配状态，追加到日期桶并重置表单。
    pub fn add_task(&mut self, key: &str) -> bool {
        if self.form.name.trim().is_empty() {
            return false;
        }

        let task = ActivityTask {
            id: self.next_id,
            name: self.form.name.clone(),
            description: self.form.description.clone(),
            tag: self.form.tag.clone(),
            status: TaskStatus::CYCLE[self.status_cycle_index],
            time: Utc::now(),
        };
        self.next_id += 1;
        self.status_cycle_index = (self.status_cycle_index + 1) % TaskStatus::CYCLE.len();

        self.activities.entry(key.to_string()).or_default().push(task);
        self.form = NewTaskForm::default();
        true
    }

    /// 按显示顺序的索引删除任务
    ///
    /// 存储顺序即最近一次排序后的显示顺序（见 [`sort_tasks`]），
    /// 所以索引总是指向用户看到的那一行。日期不存在或索引越界时静默忽略。
    ///
    /// [`sort_tasks`]: ActivityStore::sort_tasks
    pub fn remove_task(&mut self, key: &str, index: usize) {
        if let Some(tasks) = self.activities.get_mut(key)
            && index < tasks.len()
        {
            tasks.remove(index);
        }
    }

    /// 按当前排序条件就地重排指定日期的任务
    ///
    /// 字段值按字符串字典序比较（标签 "10" 会排在 "2" 之前）。
    /// 排序是稳定的，条件不变时重复调用幂等。
    pub fn sort_tasks(&mut self, key: &str) {
        let (criteria, order) = (self.sort_criteria, self.sort_order);
        if let Some(tasks) = self.activities.get_mut(key) {
            tasks.sort_by(|a, b| {
                let (a_value, b_value) = match criteria {
                    SortCriteria::Name => (&a.name, &b.name),
                    SortCriteria::Tag => (&a.tag, &b.tag),
                };
                match order {
                    SortOrder::Asc => a_value.cmp(b_value),
                    SortOrder::Desc => b_value.cmp(a_value),
                }
            });
        }
    }

    /// 指定日期的任务列表（存储顺序）
    pub fn tasks(&self, key: &str) -> &[ActivityTask] {
        self.activities.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 所有日期的任务总数
    pub fn total_count(&self) -> usize {
        self.activities.values().map(Vec::len).sum()
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_named(store: &mut ActivityStore, key: &str, name: &str) -> bool {
        store.form.name = name.to_string();
        store.add_task(key)
    }

    #[test]
    fn test_add_task_appends_to_date_bucket() {
        let mut store = ActivityStore::new();
        assert!(add_named(&mut store, "2026-08-23", "write report"));
        assert_eq!(store.tasks("2026-08-23").len(), 1);
        assert_eq!(store.tasks("2026-08-23")[0].name, "write report");
        assert_eq!(store.total_count(), 1);
    }

    #[test]
    fn test_status_cycle_spans_all_dates() {
        let mut store = ActivityStore::new();
        add_named(&mut store, "2026-08-23", "one");
        add_named(&mut store, "2026-08-23", "two");
        // 第三次插入发生在另一个日期，轮转计数照常前进
        add_named(&mut store, "2026-08-24", "three");
        add_named(&mut store, "2026-08-23", "four");
        add_named(&mut store, "2026-08-23", "five");

        let day_one = store.tasks("2026-08-23");
        assert_eq!(day_one[0].status, TaskStatus::Upcoming);
        assert_eq!(day_one[1].status, TaskStatus::Overdue);
        assert_eq!(store.tasks("2026-08-24")[0].status, TaskStatus::Canceled);
        assert_eq!(day_one[2].status, TaskStatus::Done);
        // 第五次成功插入回到循环起点
        assert_eq!(day_one[3].status, TaskStatus::Upcoming);
    }

    #[test]
    fn test_blank_name_is_rejected_without_advancing_cycle() {
        let mut store = ActivityStore::new();
        assert!(!add_named(&mut store, "2026-08-23", ""));
        assert!(!add_named(&mut store, "2026-08-23", "   \t"));
        assert_eq!(store.total_count(), 0);

        // 失败的提交不消耗轮转位置
        assert!(add_named(&mut store, "2026-08-23", "real"));
        assert_eq!(store.tasks("2026-08-23")[0].status, TaskStatus::Upcoming);
    }

    #[test]
    fn test_blank_name_keeps_form_untouched() {
        let mut store = ActivityStore::new();
        store.form.name = "  ".to_string();
        store.form.description = "draft".to_string();
        store.form.tag = "4".to_string();
        assert!(!store.add_task("2026-08-23"));
        assert_eq!(store.form.description, "draft");
        assert_eq!(store.form.tag, "4");
    }

    #[test]
    fn test_successful_add_resets_form() {
        let mut store = ActivityStore::new();
        store.form.name = "task".to_string();
        store.form.description = "details".to_string();
        store.form.tag = "5".to_string();
        assert!(store.add_task("2026-08-23"));
        assert!(store.form.name.is_empty());
        assert!(store.form.description.is_empty());
        assert_eq!(store.form.tag, "1");

        let task = &store.tasks("2026-08-23")[0];
        assert_eq!(task.description, "details");
        assert_eq!(task.tag, "5");
    }

    #[test]
    fn test_ids_are_unique_across_dates() {
        let mut store = ActivityStore::new();
        add_named(&mut store, "2026-08-23", "a");
        add_named(&mut store, "2026-08-24", "b");
        add_named(&mut store, "2026-08-23", "c");

        let mut ids: Vec<u64> = store
            .tasks("2026-08-23")
            .iter()
            .chain(store.tasks("2026-08-24"))
            .map(|t| t.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let mut store = ActivityStore::new();
        for name in ["b", "a", "c"] {
            add_named(&mut store, "2026-08-23", name);
        }

        store.sort_tasks("2026-08-23");
        let names: Vec<&str> = store.tasks("2026-08-23").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        store.sort_order = SortOrder::Desc;
        store.sort_tasks("2026-08-23");
        let names: Vec<&str> = store.tasks("2026-08-23").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_tag_is_lexicographic_not_numeric() {
        let mut store = ActivityStore::new();
        for tag in ["2", "10", "3"] {
            store.form.name = format!("task-{}", tag);
            store.form.tag = tag.to_string();
            store.add_task("2026-08-23");
        }

        store.sort_criteria = SortCriteria::Tag;
        store.sort_tasks("2026-08-23");
        let tags: Vec<&str> = store.tasks("2026-08-23").iter().map(|t| t.tag.as_str()).collect();
        // 字符串字典序："10" < "2" < "3"
        assert_eq!(tags, ["10", "2", "3"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut store = ActivityStore::new();
        for name in ["b", "a", "b", "c"] {
            add_named(&mut store, "2026-08-23", name);
        }

        store.sort_tasks("2026-08-23");
        let first: Vec<u64> = store.tasks("2026-08-23").iter().map(|t| t.id).collect();
        store.sort_tasks("2026-08-23");
        let second: Vec<u64> = store.tasks("2026-08-23").iter().map(|t| t.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_task_targets_display_order() {
        let mut store = ActivityStore::new();
        for name in ["b", "a", "c"] {
            add_named(&mut store, "2026-08-23", name);
        }

        // 排序后的显示顺序是 a, b, c；删除索引 0 应删掉 "a"
        store.sort_tasks("2026-08-23");
        store.remove_task("2026-08-23", 0);
        let names: Vec<&str> = store.tasks("2026-08-23").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn test_remove_task_out_of_range_is_noop() {
        let mut store = ActivityStore::new();
        add_named(&mut store, "2026-08-23", "only");
        store.remove_task("2026-08-23", 1);
        store.remove_task("2026-08-23", 99);
        assert_eq!(store.tasks("2026-08-23").len(), 1);
    }

    #[test]
    fn test_remove_task_missing_date_is_noop() {
        let mut store = ActivityStore::new();
        store.remove_task("2030-01-01", 0);
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn test_missing_date_reads_as_empty() {
        let store = ActivityStore::new();
        assert!(store.tasks("2026-08-23").is_empty());
    }

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(date_key(date), "2026-08-03");
    }
}
