//! 列表视图模型：过滤 Tab、数量统计与时间显示

use chrono::{DateTime, Utc};

use crate::storage::tasks::{Task, TaskStatus};

/// 状态过滤 Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTab {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl FilterTab {
    /// 切换到下一个 Tab（循环）
    pub fn next(&self) -> Self {
        match self {
            FilterTab::All => FilterTab::Todo,
            FilterTab::Todo => FilterTab::InProgress,
            FilterTab::InProgress => FilterTab::Done,
            FilterTab::Done => FilterTab::All,
        }
    }

    /// Tab 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            FilterTab::All => "All",
            FilterTab::Todo => "Todo",
            FilterTab::InProgress => "In Progress",
            FilterTab::Done => "Done",
        }
    }

    /// 所有 Tab 列表
    pub fn all() -> &'static [FilterTab] {
        &[
            FilterTab::All,
            FilterTab::Todo,
            FilterTab::InProgress,
            FilterTab::Done,
        ]
    }

    /// Tab 对应的任务状态（All 不限定状态）
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            FilterTab::All => None,
            FilterTab::Todo => Some(TaskStatus::Todo),
            FilterTab::InProgress => Some(TaskStatus::InProgress),
            FilterTab::Done => Some(TaskStatus::Done),
        }
    }

    /// 任务是否落入该 Tab
    pub fn matches(&self, task: &Task) -> bool {
        match self.status() {
            None => true,
            Some(status) => task.status == status,
        }
    }
}

/// 任务数量统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// 格式化相对时间，如 "5 mins ago"
pub fn format_relative_time(dt: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(dt);

    // 时钟偏差导致的未来时间也归入 "just now"
    if duration.num_seconds() < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if duration.num_minutes() < 60 {
        (duration.num_minutes(), "min")
    } else if duration.num_hours() < 24 {
        (duration.num_hours(), "hour")
    } else if duration.num_days() < 30 {
        (duration.num_days(), "day")
    } else if duration.num_days() < 365 {
        (duration.num_days() / 30, "month")
    } else {
        (duration.num_days() / 365, "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_tab_cycle() {
        let mut tab = FilterTab::All;
        for _ in 0..4 {
            tab = tab.next();
        }
        assert_eq!(tab, FilterTab::All);
        assert_eq!(FilterTab::Done.next(), FilterTab::All);
    }

    #[test]
    fn test_tab_matches() {
        let mut task = Task::new("Write report", None);
        assert!(FilterTab::All.matches(&task));
        assert!(FilterTab::Todo.matches(&task));
        assert!(!FilterTab::Done.matches(&task));

        task.status = TaskStatus::Done;
        assert!(FilterTab::All.matches(&task));
        assert!(FilterTab::Done.matches(&task));
        assert!(!FilterTab::Todo.matches(&task));
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(1)), "1 min ago");
        assert_eq!(
            format_relative_time(now - Duration::minutes(5)),
            "5 mins ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::hours(3)),
            "3 hours ago"
        );
        assert_eq!(format_relative_time(now - Duration::days(2)), "2 days ago");
        // 未来时间（时钟偏差）不应 panic
        assert_eq!(format_relative_time(now + Duration::hours(1)), "just now");
    }
}
