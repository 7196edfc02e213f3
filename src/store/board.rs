use anyhow::Result;

use crate::models::{BoardTask, Priority};
use crate::storage::BlobStore;

/// 新建看板任务的表单状态
#[derive(Debug, Clone)]
pub struct BoardForm {
    pub text: String,
    pub priority: Priority,
}

impl Default for BoardForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            priority: Priority::High,
        }
    }
}

/// 三泳道看板任务存储
///
/// 平铺的任务列表，每次变更后整体序列化写入注入的 blob 存储。
/// 编辑/改优先级/删除都针对当前选中的任务，按 id 定位；
/// 没有选中任务时这三个操作静默忽略。
pub struct BoardStore {
    tasks: Vec<BoardTask>,
    /// 当前选中任务的 id
    selected: Option<u64>,
    next_id: u64,
    storage: Box<dyn BlobStore>,
    /// 新建任务表单，成功提交后重置为空文本 / High
    pub form: BoardForm,
}

impl BoardStore {
    pub fn new(storage: Box<dyn BlobStore>) -> Self {
        Self {
            tasks: Vec::new(),
            selected: None,
            next_id: 1,
            storage,
            form: BoardForm::default(),
        }
    }

    /// 从 blob 加载任务列表
    ///
    /// blob 不存在时保持为空。id 不参与持久化，加载时按列表顺序重新分配。
    pub fn load(&mut self) -> Result<()> {
        if let Some(json) = self.storage.load()? {
            let mut tasks: Vec<BoardTask> = serde_json::from_str(&json)?;
            for task in &mut tasks {
                task.id = self.next_id;
                self.next_id += 1;
            }
            self.tasks = tasks;
        }
        Ok(())
    }

    /// 整体重写 blob
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.tasks)?;
        self.storage.save(&json)
    }

    /// 把表单中的任务追加到列表
    ///
    /// 文本去除空白后为空时静默拒绝（不写存储）。成功时返回 true，
    /// 并把表单重置为空文本 / High。
    pub fn add_task(&mut self) -> Result<bool> {
        if self.form.text.trim().is_empty() {
            return Ok(false);
        }

        self.tasks.push(BoardTask {
            id: self.next_id,
            text: self.form.text.clone(),
            priority: self.form.priority,
        });
        self.next_id += 1;
        self.form = BoardForm::default();
        self.save()?;
        Ok(true)
    }

    /// 指定优先级的任务，保持列表中的相对顺序
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&BoardTask> {
        self.tasks.iter().filter(|t| t.priority == priority).collect()
    }

    /// 选中一个任务
    pub fn select(&mut self, id: u64) {
        self.selected = Some(id);
    }

    /// 当前选中的任务
    pub fn selected(&self) -> Option<&BoardTask> {
        self.selected.and_then(|id| self.tasks.iter().find(|t| t.id == id))
    }

    /// 替换选中任务的文本，然后清除选中
    pub fn edit_task(&mut self, new_text: &str) -> Result<()> {
        if let Some(id) = self.selected.take() {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                task.text = new_text.to_string();
                self.save()?;
            }
        }
        Ok(())
    }

    /// 替换选中任务的优先级，然后清除选中
    pub fn change_priority(&mut self, priority: Priority) -> Result<()> {
        if let Some(id) = self.selected.take() {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                task.priority = priority;
                self.save()?;
            }
        }
        Ok(())
    }

    /// 删除选中的任务，然后清除选中
    pub fn delete_task(&mut self) -> Result<()> {
        if let Some(id) = self.selected.take() {
            let before = self.tasks.len();
            self.tasks.retain(|t| t.id != id);
            if self.tasks.len() != before {
                self.save()?;
            }
        }
        Ok(())
    }

    /// 完整的任务列表（列表顺序）
    pub fn tasks(&self) -> &[BoardTask] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn store_with_memory() -> (BoardStore, MemoryBlobStore) {
        let blob = MemoryBlobStore::default();
        (BoardStore::new(Box::new(blob.clone())), blob)
    }

    fn add(store: &mut BoardStore, text: &str, priority: Priority) {
        store.form.text = text.to_string();
        store.form.priority = priority;
        assert!(store.add_task().unwrap());
    }

    #[test]
    fn test_load_without_blob_starts_empty() {
        let (mut store, _blob) = store_with_memory();
        store.load().unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_load_with_corrupt_blob_errors_and_stays_empty() {
        let blob = MemoryBlobStore::default();
        blob.save("not json").unwrap();

        let mut store = BoardStore::new(Box::new(blob.clone()));
        assert!(store.load().is_err());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_blank_text_is_rejected_without_saving() {
        let (mut store, blob) = store_with_memory();
        store.form.text = "   ".to_string();
        assert!(!store.add_task().unwrap());
        assert!(store.tasks().is_empty());
        assert!(blob.contents().is_none());
    }

    #[test]
    fn test_add_resets_form_to_defaults() {
        let (mut store, _blob) = store_with_memory();
        store.form.text = "Buy milk".to_string();
        store.form.priority = Priority::Low;
        assert!(store.add_task().unwrap());
        assert!(store.form.text.is_empty());
        assert_eq!(store.form.priority, Priority::High);
    }

    #[test]
    fn test_tasks_by_priority_preserves_list_order() {
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "first high", Priority::High);
        add(&mut store, "low", Priority::Low);
        add(&mut store, "second high", Priority::High);

        let high: Vec<&str> = store
            .tasks_by_priority(Priority::High)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(high, ["first high", "second high"]);
        assert!(store.tasks_by_priority(Priority::Medium).is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let (mut store, blob) = store_with_memory();
        add(&mut store, "Buy milk", Priority::High);
        add(&mut store, "Call mom", Priority::Low);

        // 用同一份 blob 重新加载，相当于重启
        let mut reloaded = BoardStore::new(Box::new(blob.clone()));
        reloaded.load().unwrap();

        let pairs: Vec<(&str, Priority)> = reloaded
            .tasks()
            .iter()
            .map(|t| (t.text.as_str(), t.priority))
            .collect();
        assert_eq!(
            pairs,
            [("Buy milk", Priority::High), ("Call mom", Priority::Low)]
        );
    }

    #[test]
    fn test_load_reassigns_unique_ids() {
        let (mut store, blob) = store_with_memory();
        add(&mut store, "a", Priority::High);
        add(&mut store, "b", Priority::Low);

        let mut reloaded = BoardStore::new(Box::new(blob.clone()));
        reloaded.load().unwrap();
        let ids: Vec<u64> = reloaded.tasks().iter().map(|t| t.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_every_mutation_rewrites_blob() {
        let (mut store, blob) = store_with_memory();
        add(&mut store, "task", Priority::High);
        let after_add = blob.contents().unwrap();

        let id = store.tasks()[0].id;
        store.select(id);
        store.change_priority(Priority::Low).unwrap();
        let after_change = blob.contents().unwrap();
        assert_ne!(after_add, after_change);

        store.select(id);
        store.delete_task().unwrap();
        assert_eq!(blob.contents().unwrap(), "[]");
    }

    #[test]
    fn test_edit_task_replaces_text_and_clears_selection() {
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "typo", Priority::Medium);

        let id = store.tasks()[0].id;
        store.select(id);
        store.edit_task("fixed").unwrap();
        assert_eq!(store.tasks()[0].text, "fixed");
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_change_priority_moves_between_lanes() {
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "Buy milk", Priority::High);
        add(&mut store, "Call mom", Priority::Low);

        let high = store.tasks_by_priority(Priority::High);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].text, "Buy milk");

        let id = high[0].id;
        store.select(id);
        store.change_priority(Priority::Medium).unwrap();

        assert!(store.tasks_by_priority(Priority::High).is_empty());
        let medium = store.tasks_by_priority(Priority::Medium);
        assert_eq!(medium.len(), 1);
        assert_eq!(medium[0].text, "Buy milk");
    }

    #[test]
    fn test_delete_removes_only_selected() {
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "keep", Priority::High);
        add(&mut store, "drop", Priority::High);

        let id = store.tasks()[1].id;
        store.select(id);
        store.delete_task().unwrap();

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "keep");
    }

    #[test]
    fn test_mutations_without_selection_are_noops() {
        let (mut store, blob) = store_with_memory();
        add(&mut store, "task", Priority::High);
        let snapshot = blob.contents().unwrap();

        store.edit_task("ignored").unwrap();
        store.change_priority(Priority::Low).unwrap();
        store.delete_task().unwrap();

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "task");
        assert_eq!(blob.contents().unwrap(), snapshot);
    }

    #[test]
    fn test_duplicate_tasks_are_disambiguated_by_id() {
        // 两个结构上完全相同的任务：按值匹配无法区分，
        // 只有按 id 选中才能保证删到想删的那一个
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "x", Priority::Low);
        add(&mut store, "x", Priority::Low);

        let first_id = store.tasks()[0].id;
        let second_id = store.tasks()[1].id;
        assert_eq!(store.tasks()[0].text, store.tasks()[1].text);
        assert_eq!(store.tasks()[0].priority, store.tasks()[1].priority);

        store.select(second_id);
        store.delete_task().unwrap();

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, first_id);
    }

    #[test]
    fn test_selection_of_vanished_id_is_noop() {
        let (mut store, _blob) = store_with_memory();
        add(&mut store, "task", Priority::High);
        store.select(999);
        assert!(store.selected().is_none());
        store.edit_task("ignored").unwrap();
        assert_eq!(store.tasks()[0].text, "task");
    }
}
