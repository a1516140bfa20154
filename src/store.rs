//! Task Store：任务集合的唯一所有者
//!
//! 内存中的任务列表按创建时间新建在前排列，每次变更后整体镜像到
//! 存储文件。持久化是尽力而为的：写入失败不影响内存状态，也不向
//! 用户报错。

use std::path::PathBuf;

use crate::error::Result;
use crate::model::{FilterTab, TaskCounts};
use crate::storage::{
    self,
    tasks::{load_tasks, save_tasks, Task, TaskStatus, TASKS_FILE},
};

/// 任务集合与持久化镜像
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// 启动时加载持久化的任务集合
    ///
    /// 文件缺失、数据损坏或存储不可用一律降级为空集合。
    pub fn load() -> Self {
        let path = storage::ensure_data_dir()
            .map(|dir| dir.join(TASKS_FILE))
            .unwrap_or_else(|_| PathBuf::from(TASKS_FILE));
        Self::load_from(path)
    }

    /// 从指定文件加载
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = load_tasks(&path);
        Self { tasks, path }
    }

    /// 任务集合（新建在前）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 添加任务并返回新任务的 id
    ///
    /// 标题去除首尾空白后为空则不做任何事；描述为空时不保留。
    pub fn add(&mut self, title: &str, description: Option<&str>) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        let task = Task::new(title, description);
        let id = task.id.clone();
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    /// 更新任务状态；id 不存在时不做任何事
    pub fn set_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
            self.persist();
        }
    }

    /// 删除任务；id 不存在时不做任何事（幂等）
    pub fn remove(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// 将完整集合写入存储（尽力而为，失败静默）
    pub fn persist(&self) {
        let _ = self.try_persist();
    }

    fn try_persist(&self) -> Result<()> {
        save_tasks(&self.path, &self.tasks)
    }

    // ===== 派生查询（纯函数，无副作用） =====

    /// 按状态过滤
    pub fn filter_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// 大小写无关的子串搜索（标题与描述）
    pub fn search(&self, query: &str) -> Vec<&Task> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.tasks.iter().collect();
        }
        self.tasks
            .iter()
            .filter(|t| matches_query(t, &query))
            .collect()
    }

    /// Tab 过滤与搜索的组合视图（UI 消费的形式）
    pub fn filtered(&self, tab: FilterTab, query: &str) -> Vec<&Task> {
        self.search(query)
            .into_iter()
            .filter(|t| tab.matches(t))
            .collect()
    }

    /// 任务数量统计
    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            todo: self.filter_by_status(TaskStatus::Todo).len(),
            in_progress: self.filter_by_status(TaskStatus::InProgress).len(),
            done: self.filter_by_status(TaskStatus::Done).len(),
        }
    }
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query)
        || task
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(query))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TaskStore {
        TaskStore::load_from(dir.path().join(TASKS_FILE))
    }

    #[test]
    fn test_add_prepends() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.add("first", None).unwrap();
        store.add("second", None).unwrap();

        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].title, "second");
        assert_eq!(store.tasks()[1].title, "first");
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn test_add_trims_title_and_description() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.add("  Write report  ", Some("  quarterly numbers  ")).unwrap();
        assert_eq!(store.tasks()[0].title, "Write report");
        assert_eq!(
            store.tasks()[0].description.as_deref(),
            Some("quarterly numbers")
        );

        store.add("no description", Some("   ")).unwrap();
        assert_eq!(store.tasks()[0].description, None);
    }

    #[test]
    fn test_add_empty_title_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.add("", None).is_none());
        assert!(store.add("   \t ", Some("has description")).is_none());
        assert!(store.tasks().is_empty());
        // 不应产生存储文件
        assert!(!dir.path().join(TASKS_FILE).exists());
    }

    #[test]
    fn test_set_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let id = store.add("Write report", None).unwrap();
        store.set_status(&id, TaskStatus::Done);
        assert_eq!(store.tasks()[0].status, TaskStatus::Done);

        store.set_status(&id, TaskStatus::Todo);
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn test_set_status_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.add("Write report", None).unwrap();
        let before = store.tasks().to_vec();

        store.set_status("no-such-id", TaskStatus::Done);
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let id = store.add("Write report", None).unwrap();
        store.add("keep me", None).unwrap();

        store.remove(&id);
        assert_eq!(store.tasks().len(), 1);

        // 再删一次，效果与删一次相同
        store.remove(&id);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "keep me");
    }

    #[test]
    fn test_mutations_are_mirrored_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let id = store.add("Write report", Some("quarterly numbers")).unwrap();
        assert_eq!(store_in(&dir).tasks(), store.tasks());

        store.set_status(&id, TaskStatus::InProgress);
        assert_eq!(store_in(&dir).tasks()[0].status, TaskStatus::InProgress);

        store.remove(&id);
        assert!(store_in(&dir).tasks().is_empty());
    }

    #[test]
    fn test_load_missing_or_corrupt_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).tasks().is_empty());

        std::fs::write(dir.path().join(TASKS_FILE), "]][[ garbage").unwrap();
        assert!(store_in(&dir).tasks().is_empty());
    }

    #[test]
    fn test_filter_by_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let a = store.add("a", None).unwrap();
        store.add("b", None).unwrap();
        store.set_status(&a, TaskStatus::Done);

        let done = store.filter_by_status(TaskStatus::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "a");
        assert!(store.filter_by_status(TaskStatus::InProgress).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.add("Write REPORT", None).unwrap();
        store.add("buy milk", Some("from the Corner Shop")).unwrap();

        // 标题匹配
        assert_eq!(store.search("report").len(), 1);
        // 描述匹配
        assert_eq!(store.search("corner shop").len(), 1);
        // 空查询匹配全部
        assert_eq!(store.search("").len(), 2);
        assert_eq!(store.search("   ").len(), 2);
        // 无匹配
        assert!(store.search("nothing here").is_empty());
    }

    #[test]
    fn test_filtered_combines_tab_and_query() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let a = store.add("fix login bug", None).unwrap();
        store.add("fix logout bug", None).unwrap();
        store.add("write docs", None).unwrap();
        store.set_status(&a, TaskStatus::Done);

        assert_eq!(store.filtered(FilterTab::All, "").len(), 3);
        assert_eq!(store.filtered(FilterTab::All, "fix").len(), 2);
        assert_eq!(store.filtered(FilterTab::Done, "fix").len(), 1);
        assert_eq!(store.filtered(FilterTab::Todo, "FIX").len(), 1);
        assert!(store.filtered(FilterTab::InProgress, "").is_empty());
    }

    #[test]
    fn test_counts() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let a = store.add("a", None).unwrap();
        let b = store.add("b", None).unwrap();
        store.add("c", None).unwrap();
        store.set_status(&a, TaskStatus::Done);
        store.set_status(&b, TaskStatus::InProgress);

        let counts = store.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.todo, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.done, 1);
    }
}
