use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::model::FilterTab;
use crate::storage::tasks::TaskStatus;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 删除确认弹窗
    if app.confirm_delete.is_some() {
        handle_confirm_delete_key(app, key);
        return;
    }

    // 新建任务弹窗
    if app.new_task_dialog.is_some() {
        handle_new_task_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 搜索模式
    if app.search_mode {
        handle_search_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理主列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Tab 切换
        KeyCode::Tab => app.next_tab(),

        // 数字快捷键切换 Tab
        KeyCode::Char('1') => app.set_tab(FilterTab::All),
        KeyCode::Char('2') => app.set_tab(FilterTab::Todo),
        KeyCode::Char('3') => app.set_tab(FilterTab::InProgress),
        KeyCode::Char('4') => app.set_tab(FilterTab::Done),

        // 功能按键 - 新建任务
        KeyCode::Char('n') => app.open_new_task_dialog(),

        // 功能按键 - 删除任务
        KeyCode::Char('x') => app.open_confirm_delete(),

        // 功能按键 - 搜索
        KeyCode::Char('/') => app.enter_search_mode(),

        // 状态变更
        KeyCode::Char('t') => app.set_selected_status(TaskStatus::Todo),
        KeyCode::Char('i') => app.set_selected_status(TaskStatus::InProgress),
        KeyCode::Char('d') => app.set_selected_status(TaskStatus::Done),
        KeyCode::Char(' ') => app.cycle_selected_status(),

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') => app.open_theme_selector(),

        // Esc 清空搜索条件
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }

        _ => {}
    }
}

/// 处理搜索模式的键盘事件
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认搜索（保留内容）
        KeyCode::Enter => app.exit_search_mode(),

        // 取消搜索
        KeyCode::Esc => app.clear_search(),

        // 导航
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),

        // 删除字符
        KeyCode::Backspace => app.search_pop(),

        // 输入字符
        KeyCode::Char(c) => app.search_push(c),

        _ => {}
    }
}

/// 处理新建任务弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 创建任务
        KeyCode::Enter => app.submit_new_task(),

        // 取消
        KeyCode::Esc => app.close_new_task_dialog(),

        // 切换输入字段
        KeyCode::Tab => {
            if let Some(dialog) = app.new_task_dialog.as_mut() {
                dialog.toggle_focus();
            }
        }

        // 删除字符
        KeyCode::Backspace => app.dialog_delete_char(),

        // 输入字符
        KeyCode::Char(c) => app.dialog_input_char(c),

        _ => {}
    }
}

/// 处理删除确认弹窗的键盘事件
fn handle_confirm_delete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete_task(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_confirm_delete(),
        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc => app.close_theme_selector(),
        _ => {}
    }
}
