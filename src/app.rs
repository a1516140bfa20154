use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::{FilterTab, TaskCounts};
use crate::storage::config::{self, Config, ThemeConfig};
use crate::storage::tasks::{Task, TaskStatus};
use crate::store::TaskStore;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 新建任务弹窗的输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Title,
    Description,
}

/// 新建任务弹窗状态
#[derive(Debug, Default)]
pub struct NewTaskDialog {
    pub title: String,
    pub description: String,
    pub focus: InputField,
}

impl NewTaskDialog {
    /// 当前焦点字段的输入缓冲（可变）
    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Title => &mut self.title,
            InputField::Description => &mut self.description,
        }
    }

    /// 切换输入焦点
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Title => InputField::Description,
            InputField::Description => InputField::Title,
        };
    }
}

/// 删除确认弹窗状态
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: String,
    pub title: String,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储（唯一的数据所有者）
    pub store: TaskStore,
    /// 当前过滤 Tab
    pub filter_tab: FilterTab,
    /// 搜索内容
    pub search_query: String,
    /// 是否正在输入搜索
    pub search_mode: bool,
    /// 列表选择状态
    pub list_state: ListState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 新建任务弹窗
    pub new_task_dialog: Option<NewTaskDialog>,
    /// 删除确认弹窗
    pub confirm_delete: Option<ConfirmDelete>,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
}

impl App {
    pub fn new() -> Self {
        let config = config::load_config();
        let theme = Theme::from_name(&config.theme.name);

        let mut app = Self::from_store(TaskStore::load());
        app.theme = theme;
        app.colors = get_theme_colors(theme);
        app
    }

    /// 从给定的 store 构建应用状态（测试入口）
    pub fn from_store(store: TaskStore) -> Self {
        let theme = Theme::default();
        let mut list_state = ListState::default();
        if !store.tasks().is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            store,
            filter_tab: FilterTab::All,
            search_query: String::new(),
            search_mode: false,
            list_state,
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: 0,
            new_task_dialog: None,
            confirm_delete: None,
            last_system_dark: detect_system_theme(),
        }
    }

    // ========== 列表视图 ==========

    /// 当前 Tab + 搜索条件下可见的任务
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filtered(self.filter_tab, &self.search_query)
    }

    /// 任务数量统计（Header 显示）
    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.list_state.selected()?;
        self.visible_tasks().get(index).copied()
    }

    /// 确保可见列表有合法选中项
    pub fn ensure_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(index) if index < len => {}
            _ => self.list_state.select(Some(0)),
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== 过滤与搜索 ==========

    /// 切换到下一个 Tab
    pub fn next_tab(&mut self) {
        self.set_tab(self.filter_tab.next());
    }

    /// 切换到指定 Tab
    pub fn set_tab(&mut self, tab: FilterTab) {
        self.filter_tab = tab;
        self.list_state.select(None);
        self.ensure_selection();
    }

    /// 进入搜索输入模式
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// 退出搜索输入模式（保留搜索内容）
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// 清空并退出搜索
    pub fn clear_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.ensure_selection();
    }

    /// 搜索输入字符
    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.ensure_selection();
    }

    /// 搜索删除字符
    pub fn search_pop(&mut self) {
        self.search_query.pop();
        self.ensure_selection();
    }

    // ========== 新建任务弹窗 ==========

    /// 打开新建任务弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.new_task_dialog = Some(NewTaskDialog::default());
    }

    /// 关闭新建任务弹窗
    pub fn close_new_task_dialog(&mut self) {
        self.new_task_dialog = None;
    }

    /// 弹窗输入字符
    pub fn dialog_input_char(&mut self, c: char) {
        if let Some(dialog) = self.new_task_dialog.as_mut() {
            dialog.focused_input_mut().push(c);
        }
    }

    /// 弹窗删除字符
    pub fn dialog_delete_char(&mut self) {
        if let Some(dialog) = self.new_task_dialog.as_mut() {
            dialog.focused_input_mut().pop();
        }
    }

    /// 提交新任务
    ///
    /// 标题为空时保留弹窗让用户继续输入。
    pub fn submit_new_task(&mut self) {
        let (title, description) = match &self.new_task_dialog {
            Some(dialog) => (dialog.title.clone(), dialog.description.clone()),
            None => return,
        };

        if self.store.add(&title, Some(&description)).is_some() {
            self.new_task_dialog = None;
            // 新任务排在最前
            self.list_state.select(Some(0));
            self.ensure_selection();
            self.show_toast(format!("Created: {}", title.trim()));
        } else {
            self.show_toast("Task title cannot be empty");
        }
    }

    // ========== 状态变更 ==========

    /// 设置选中任务的状态
    pub fn set_selected_status(&mut self, status: TaskStatus) {
        let Some(id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        self.store.set_status(&id, status);
        // 状态变化可能使任务移出当前 Tab
        self.ensure_selection();
    }

    /// 循环切换选中任务的状态
    pub fn cycle_selected_status(&mut self) {
        let Some((id, status)) = self.selected_task().map(|t| (t.id.clone(), t.status)) else {
            return;
        };
        self.store.set_status(&id, status.next());
        self.ensure_selection();
    }

    // ========== 删除确认弹窗 ==========

    /// 打开删除确认弹窗（针对当前选中任务）
    pub fn open_confirm_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm_delete = Some(ConfirmDelete {
                id: task.id.clone(),
                title: task.title.clone(),
            });
        }
    }

    /// 确认删除
    pub fn confirm_delete_task(&mut self) {
        if let Some(confirm) = self.confirm_delete.take() {
            self.store.remove(&confirm.id);
            self.ensure_selection();
            self.show_toast(format!("Deleted: {}", confirm.title));
        }
    }

    /// 取消删除
    pub fn cancel_confirm_delete(&mut self) {
        self.confirm_delete = None;
    }

    // ========== 主题选择器 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let themes = Theme::all();
        self.theme_selector_index = themes.iter().position(|t| *t == self.theme).unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        };
        let _ = config::save_config(&config);

        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }
        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== 其它 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 清理过期的 Toast
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tasks::TASKS_FILE;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::from_store(TaskStore::load_from(dir.path().join(TASKS_FILE)))
    }

    #[test]
    fn test_submit_new_task_via_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_new_task_dialog();
        for c in "Write report".chars() {
            app.dialog_input_char(c);
        }
        app.dialog_input_char('!');
        app.dialog_delete_char();
        if let Some(dialog) = app.new_task_dialog.as_mut() {
            dialog.toggle_focus();
        }
        for c in "quarterly numbers".chars() {
            app.dialog_input_char(c);
        }
        app.submit_new_task();

        assert!(app.new_task_dialog.is_none());
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].title, "Write report");
        assert_eq!(
            app.store.tasks()[0].description.as_deref(),
            Some("quarterly numbers")
        );
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_submit_empty_title_keeps_dialog_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.open_new_task_dialog();
        app.dialog_input_char(' ');
        app.submit_new_task();

        assert!(app.new_task_dialog.is_some());
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn test_status_keys_update_selected_task() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.store.add("a", None);
        app.ensure_selection();

        app.set_selected_status(TaskStatus::Done);
        assert_eq!(app.store.tasks()[0].status, TaskStatus::Done);

        // Done -> Todo（循环）
        app.cycle_selected_status();
        assert_eq!(app.store.tasks()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn test_status_change_leaving_tab_fixes_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.store.add("only", None);
        app.set_tab(FilterTab::Todo);
        assert_eq!(app.list_state.selected(), Some(0));

        app.set_selected_status(TaskStatus::Done);
        // Todo Tab 下不再有可见任务
        assert!(app.visible_tasks().is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.store.add("doomed", None);
        app.ensure_selection();

        app.open_confirm_delete();
        assert_eq!(app.confirm_delete.as_ref().unwrap().title, "doomed");

        app.cancel_confirm_delete();
        assert_eq!(app.store.tasks().len(), 1);

        app.open_confirm_delete();
        app.confirm_delete_task();
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_search_narrows_visible_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.store.add("fix login bug", None);
        app.store.add("write docs", None);
        app.ensure_selection();

        app.enter_search_mode();
        for c in "LOGIN".chars() {
            app.search_push(c);
        }
        assert_eq!(app.visible_tasks().len(), 1);
        assert_eq!(app.visible_tasks()[0].title, "fix login bug");

        app.clear_search();
        assert_eq!(app.visible_tasks().len(), 2);
    }

    #[test]
    fn test_selection_wraps() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        app.store.add("a", None);
        app.store.add("b", None);
        app.ensure_selection();

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }
}
