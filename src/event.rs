use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

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

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 优先处理弹窗事件
    if app.show_help {
        handle_help_key(app, key);
    } else if app.show_theme_selector {
        handle_theme_selector_key(app, key);
    } else if app.add_dialog.is_some() {
        handle_add_dialog_key(app, key);
    } else if app.is_editing() {
        handle_editor_key(app, key);
    } else {
        handle_list_key(app, key);
    }

    app.process_store_events();
}

/// 处理列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('t') | KeyCode::Char('T') => app.open_theme_selector(),
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.add_dialog_confirm(),
        KeyCode::Esc => app.close_add_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.add_dialog_toggle_focus()
        }
        KeyCode::Backspace => app.add_dialog_delete_char(),
        KeyCode::Char(c) => app.add_dialog_input_char(c),
        _ => {}
    }
}

/// 处理行内编辑器的键盘事件
fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.editor_save(),
        KeyCode::Esc => app.editor_cancel(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.editor_toggle_focus()
        }
        KeyCode::Backspace => app.editor_delete_char(),
        KeyCode::Char(c) => app.editor_input_char(c),
        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_theme_selector(),
        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
    ) {
        app.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use crate::theme::Theme;

    fn new_app() -> App {
        App::new(Config::default(), None, Theme::Dark)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_edit_delete_by_keys() {
        let mut app = new_app();

        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2%");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.tasks()[0].title(), "1 - Buy milk");

        press(&mut app, KeyCode::Char('e'));
        assert!(app.is_editing());
        // 编辑时 q / d 是普通输入
        type_str(&mut app, "qd");
        press(&mut app, KeyCode::Enter);
        assert!(!app.should_quit);
        assert_eq!(app.store.tasks()[0].name, "Buy milkqd");

        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_add_dialog_escape() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "nope");
        press(&mut app, KeyCode::Esc);

        assert!(app.add_dialog.is_none());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_help_blocks_list_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.add_dialog.is_none());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
