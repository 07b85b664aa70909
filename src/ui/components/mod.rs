pub mod add_task_dialog;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod task_list;
pub mod theme_selector;
pub mod toast;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 输入框焦点（添加弹窗和行内编辑器共用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Name,
    Subscript,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            InputField::Name => InputField::Subscript,
            InputField::Subscript => InputField::Name,
        }
    }
}

/// 按显示宽度截断字符串，超出部分用省略号替代（CJK 字符占两列）
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 预留一列给省略号
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
