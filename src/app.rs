use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::{StoreEvent, TaskId, TaskListStore};
use crate::storage::config::{self, Config};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};
use crate::ui::components::add_task_dialog::AddTaskDialogData;
use crate::ui::components::InputField;

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    /// 警告样式（例如配置保存失败）
    pub warning: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            warning: false,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn warning(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            warning: true,
            ..Self::new(message, duration)
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务数据（唯一数据源）
    pub store: TaskListStore,
    /// Store 变更通知
    store_events: Receiver<StoreEvent>,
    /// 列表选择状态
    pub list_state: ListState,
    /// Add Task 弹窗（打开时为 Some）
    pub add_dialog: Option<AddTaskDialogData>,
    /// 弹窗取消后保留的输入，下次打开时恢复
    add_draft: AddTaskDialogData,
    /// 行内编辑器当前焦点
    pub editor_focus: InputField,
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
    /// 打开选择器前的主题，取消时恢复
    theme_before_selector: Theme,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 是否显示帮助面板
    pub show_help: bool,
    config: Config,
    /// 配置文件路径，None 表示不保存
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>, theme: Theme) -> Self {
        let mut store = TaskListStore::new();
        let store_events = store.subscribe();

        Self {
            should_quit: false,
            store,
            store_events,
            list_state: ListState::default(),
            add_dialog: None,
            add_draft: AddTaskDialogData::new(),
            editor_focus: InputField::Name,
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: theme.position(),
            theme_before_selector: theme,
            last_system_dark: detect_system_theme(),
            show_help: false,
            config,
            config_path,
        }
    }

    // ========== Store 事件 ==========

    /// 处理 store 广播的变更：同步选中项并提示
    pub fn process_store_events(&mut self) {
        let events: Vec<StoreEvent> = self.store_events.try_iter().collect();
        for event in events {
            match event {
                StoreEvent::Added(id) => {
                    if let Some(pos) = self.store.position(id) {
                        self.list_state.select(Some(pos));
                    }
                    if let Some(name) = self.task_name(id) {
                        self.show_toast(format!("Added: {}", name));
                    }
                }
                StoreEvent::Edited(id) => {
                    if let Some(name) = self.task_name(id) {
                        self.show_toast(format!("Saved: {}", name));
                    }
                }
                StoreEvent::Deleted(_) => self.clamp_selection(),
                StoreEvent::EditStarted(_) | StoreEvent::EditCancelled(_) => {}
            }
        }
    }

    fn task_name(&self, id: TaskId) -> Option<String> {
        self.store.get(id).map(|t| t.name.clone())
    }

    // ========== 列表导航 ==========

    /// 当前选中的任务
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.store.tasks().get(index).map(|t| t.id)
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 删除后保证选中项仍在范围内
    fn clamp_selection(&mut self) {
        let len = self.store.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    // ========== Add Task Dialog ==========

    /// 打开弹窗，恢复上次取消时的输入
    pub fn open_add_dialog(&mut self) {
        if self.add_dialog.is_none() {
            let mut draft = std::mem::take(&mut self.add_draft);
            draft.focus = InputField::Name;
            self.add_dialog = Some(draft);
        }
    }

    /// 取消只隐藏弹窗，输入内容保留
    pub fn close_add_dialog(&mut self) {
        if let Some(dialog) = self.add_dialog.take() {
            self.add_draft = dialog;
        }
    }

    pub fn add_dialog_input_char(&mut self, c: char) {
        if let Some(ref mut dialog) = self.add_dialog {
            dialog.input_char(c);
        }
    }

    pub fn add_dialog_delete_char(&mut self) {
        if let Some(ref mut dialog) = self.add_dialog {
            dialog.delete_char();
        }
    }

    pub fn add_dialog_toggle_focus(&mut self) {
        if let Some(ref mut dialog) = self.add_dialog {
            dialog.toggle_focus();
        }
    }

    /// 确认添加；名称为空时弹窗保持打开，不做提示
    pub fn add_dialog_confirm(&mut self) {
        let Some(ref dialog) = self.add_dialog else {
            return;
        };

        if self
            .store
            .add(dialog.name.clone(), dialog.subscript.clone())
            .is_some()
        {
            self.add_dialog = None;
            self.add_draft = AddTaskDialogData::new();
            self.process_store_events();
        }
    }

    // ========== Inline Editor ==========

    pub fn is_editing(&self) -> bool {
        self.store.editing().is_some()
    }

    /// 对选中的任务进入编辑模式
    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if !self.store.is_editing(id) {
                self.editor_focus = InputField::Name;
            }
            self.store.begin_edit(id);
            self.process_store_events();
        }
    }

    pub fn editor_input_char(&mut self, c: char) {
        let focus = self.editor_focus;
        if let Some(session) = self.store.edit_session_mut() {
            match focus {
                InputField::Name => session.draft_name.push(c),
                InputField::Subscript => session.draft_subscript.push(c),
            }
        }
    }

    pub fn editor_delete_char(&mut self) {
        let focus = self.editor_focus;
        if let Some(session) = self.store.edit_session_mut() {
            match focus {
                InputField::Name => session.draft_name.pop(),
                InputField::Subscript => session.draft_subscript.pop(),
            };
        }
    }

    pub fn editor_toggle_focus(&mut self) {
        self.editor_focus = self.editor_focus.toggle();
    }

    /// 保存草稿
    pub fn editor_save(&mut self) {
        if let Some(session) = self.store.editing().cloned() {
            self.store
                .complete_edit(session.task_id, session.draft_name, session.draft_subscript);
            self.process_store_events();
        }
    }

    pub fn editor_cancel(&mut self) {
        self.store.cancel_edit();
        self.process_store_events();
    }

    // ========== Delete ==========

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(task) = self.store.delete(id) {
            self.show_toast(format!("Deleted: {}", task.name));
        }
        self.process_store_events();
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = self.theme.position();
        self.theme_before_selector = self.theme;
        self.show_theme_selector = true;
    }

    /// 取消选择，恢复原主题
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
        self.apply_theme(self.theme_before_selector);
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
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;
        self.config.theme.name = self.theme.label().to_string();

        if let Some(ref path) = self.config_path {
            if let Err(e) = config::save_config_to(path, &self.config) {
                tracing::warn!(error = %e, "failed to save theme");
                self.show_warning(format!("Failed to save config: {}", e));
                return;
            }
        }
        tracing::info!(theme = self.theme.label(), "theme changed");
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.apply_theme(*theme);
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
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

    // ========== Toast ==========

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::warning(message, TOAST_DURATION));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
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

    fn app() -> App {
        App::new(Config::default(), None, Theme::Dark)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.add_dialog_input_char(c);
        }
    }

    fn add(app: &mut App, name: &str, subscript: &str) {
        app.open_add_dialog();
        type_str(app, name);
        app.add_dialog_toggle_focus();
        type_str(app, subscript);
        app.add_dialog_confirm();
    }

    #[test]
    fn test_add_dialog_flow() {
        let mut app = app();
        add(&mut app, "Buy milk", "2%");

        assert!(app.add_dialog.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].subscript, "2%");
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Added: Buy milk"));
    }

    #[test]
    fn test_add_dialog_blank_name_stays_open() {
        let mut app = app();
        app.open_add_dialog();
        type_str(&mut app, "   ");
        app.add_dialog_confirm();

        assert!(app.add_dialog.is_some());
        assert!(app.store.is_empty());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_add_dialog_keeps_drafts_after_cancel() {
        let mut app = app();
        app.open_add_dialog();
        type_str(&mut app, "draft");
        app.add_dialog_toggle_focus();
        type_str(&mut app, "note");
        app.close_add_dialog();
        assert!(app.add_dialog.is_none());

        app.open_add_dialog();
        let dialog = app.add_dialog.clone().unwrap();
        assert_eq!(dialog.name, "draft");
        assert_eq!(dialog.subscript, "note");
        assert_eq!(dialog.focus, InputField::Name);
        assert!(app.store.is_empty());

        // 添加成功后输入清空
        app.add_dialog_confirm();
        assert_eq!(app.store.tasks()[0].name, "draft");
        app.open_add_dialog();
        assert_eq!(app.add_dialog, Some(AddTaskDialogData::new()));
    }

    #[test]
    fn test_new_task_is_selected() {
        let mut app = app();
        add(&mut app, "a", "");
        add(&mut app, "b", "");
        add(&mut app, "c", "");
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        add(&mut app, "a", "");
        add(&mut app, "b", "");

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_inline_edit_save() {
        let mut app = app();
        add(&mut app, "Buy milk", "2%");

        app.begin_edit_selected();
        assert!(app.is_editing());
        for _ in 0.."milk".len() {
            app.editor_delete_char();
        }
        for c in "bread".chars() {
            app.editor_input_char(c);
        }
        app.editor_toggle_focus();
        app.editor_delete_char();
        app.editor_delete_char();
        app.editor_save();

        let task = &app.store.tasks()[0];
        assert_eq!(task.name, "Buy bread");
        assert_eq!(task.subscript, "");
        assert!(!app.is_editing());
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Saved: Buy bread"));
    }

    #[test]
    fn test_inline_edit_cancel() {
        let mut app = app();
        add(&mut app, "Buy milk", "");

        app.begin_edit_selected();
        app.editor_input_char('!');
        app.editor_cancel();

        assert!(!app.is_editing());
        assert_eq!(app.store.tasks()[0].name, "Buy milk");
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = app();
        add(&mut app, "a", "");
        add(&mut app, "b", "");

        app.delete_selected();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.store.tasks()[0].name, "a");

        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.list_state.selected(), None);

        // 空列表删除不做任何事
        app.delete_selected();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_theme_selector_cancel_restores() {
        let mut app = app();
        app.open_theme_selector();
        app.theme_selector_next();
        assert_ne!(app.theme, Theme::Dark);

        app.close_theme_selector();
        assert_eq!(app.theme, Theme::Dark);
        assert!(!app.show_theme_selector);
    }

    #[test]
    fn test_theme_selector_confirm_saves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(Config::default(), Some(path.clone()), Theme::Dark);

        app.open_theme_selector();
        app.theme_selector_next();
        app.theme_selector_confirm();

        assert_eq!(app.theme, Theme::Light);
        assert_eq!(config::load_config_from(&path).unwrap().theme.name, "Light");
    }

    #[test]
    fn test_theme_confirm_keeps_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let broken = "theme = [[[\n[log]\nlevel = \"trace\"\n";
        std::fs::write(&path, broken).unwrap();

        let startup = config::load_startup_config(Some(path.clone()));
        assert!(startup.error.is_some());
        let mut app = App::new(startup.config, startup.save_path, Theme::Dark);

        app.open_theme_selector();
        app.theme_selector_next();
        app.theme_selector_confirm();

        // 本次生效，但不覆盖原文件
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_toast_expires() {
        let mut app = app();
        app.toast = Some(Toast::new("hi", Duration::ZERO));
        app.update_toast();
        assert!(app.toast.is_none());
    }
}
