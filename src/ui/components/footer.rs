use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::dialog_utils::hint_line;
use crate::theme::ThemeColors;

/// 底部提示栏对应的界面状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterContext {
    List { has_items: bool },
    Editing,
}

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, context: FooterContext, colors: &ThemeColors) {
    let mut line = hint_line(&get_shortcuts(context), colors);
    line.spans.insert(0, Span::raw("  "));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn get_shortcuts(context: FooterContext) -> Vec<(&'static str, &'static str)> {
    match context {
        FooterContext::Editing => vec![("Enter", "save"), ("Tab", "switch"), ("Esc", "cancel")],
        FooterContext::List { has_items: true } => vec![
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("j/k", "move"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        FooterContext::List { has_items: false } => {
            vec![("a", "add"), ("t", "theme"), ("?", "help"), ("q", "quit")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_hides_row_actions() {
        let keys: Vec<&str> = get_shortcuts(FooterContext::List { has_items: false })
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(!keys.contains(&"e"));
        assert!(!keys.contains(&"d"));
        assert!(keys.contains(&"a"));
    }
}
