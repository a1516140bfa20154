//! 任务数据与持久化
//!
//! 任务集合整体保存为单个 JSON 文件（数组形式）。读取对文件缺失和
//! 数据损坏宽容：一律降级为空集合，不向上层报错。

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// 任务文件名（数据目录下的固定键）
pub const TASKS_FILE: &str = "tasks.json";

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// 返回状态对应的图标
    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "○",
            TaskStatus::InProgress => "◐",
            TaskStatus::Done => "●",
        }
    }

    /// 返回状态文字标签
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    /// 切换到下一个状态（循环，任意状态间可达）
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 任务 ID (UUID v4)
    pub id: String,
    /// 任务标题（创建后非空）
    pub title: String,
    /// 可选描述（为空时不落盘）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 任务状态
    pub status: TaskStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 创建新任务（状态固定为 Todo）
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
            status: TaskStatus::Todo,
            created_at: Utc::now(),
        }
    }
}

/// 加载任务列表（文件缺失、损坏或不可读时返回空列表）
pub fn load_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }

    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// 保存任务列表
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let content = serde_json::to_string_pretty(tasks)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_strings() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Todo).unwrap(),
            "\"todo\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Done).unwrap(),
            "\"done\""
        );

        let status: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(TaskStatus::Todo.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Todo);
    }

    #[test]
    fn test_task_on_disk_layout() {
        let task = Task::new("Write report", None);
        let json = serde_json::to_string(&task).unwrap();

        // 字段名采用 camelCase，空描述不落盘
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"status\":\"todo\""));
        assert!(!json.contains("description"));

        let task = Task::new("Write report", Some("quarterly numbers".to_string()));
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"description\":\"quarterly numbers\""));
    }

    #[test]
    fn test_new_tasks_get_unique_ids() {
        let a = Task::new("a", None);
        let b = Task::new("b", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);

        let tasks = vec![
            Task::new("Write report", Some("quarterly numbers".to_string())),
            Task::new("Review pull requests", None),
        ];
        save_tasks(&path, &tasks).unwrap();

        let loaded = load_tasks(&path);
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);

        std::fs::write(&path, "not json at all {{{").unwrap();
        assert!(load_tasks(&path).is_empty());

        // JSON 但不是数组，同样视为损坏
        std::fs::write(&path, "{\"tasks\": 3}").unwrap();
        assert!(load_tasks(&path).is_empty());
    }
}
