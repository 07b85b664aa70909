//! `todo themes` 子命令

use crate::theme::Theme;

/// 打印所有可用主题，标出当前生效的那个
pub fn execute(current: Theme) {
    for theme in Theme::all() {
        let marker = if *theme == current { "*" } else { " " };
        println!("{} {}", marker, theme.label());
    }
}
