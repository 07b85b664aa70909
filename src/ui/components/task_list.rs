//! 任务列表（普通行 + 行内编辑器）

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::dialog_utils::input_line;
use super::{truncate, InputField};
use crate::model::{TaskListStore, TaskView};
use crate::theme::ThemeColors;

/// 选中指示器
const HIGHLIGHT_SYMBOL: &str = "❯ ";

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &TaskListStore,
    selected: Option<usize>,
    editor_focus: InputField,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    // 去掉左右边框和指示器的宽度
    let content_width = block
        .inner(area)
        .width
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;

    let items = build_items(store, editor_focus, content_width, colors);

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// 按显示顺序构建每一行
pub fn build_items(
    store: &TaskListStore,
    editor_focus: InputField,
    width: usize,
    colors: &ThemeColors,
) -> Vec<ListItem<'static>> {
    store
        .views()
        .map(|view| match view {
            TaskView::Viewing(task) => {
                let mut lines = vec![Line::from(Span::styled(
                    truncate(&task.title(), width),
                    Style::default()
                        .fg(colors.text)
                        .add_modifier(Modifier::BOLD),
                ))];
                if task.has_subscript() {
                    lines.push(Line::from(Span::styled(
                        truncate(&task.subscript, width),
                        Style::default().fg(colors.muted),
                    )));
                }
                ListItem::new(lines)
            }
            TaskView::Editing(task, session) => {
                let header = Line::from(Span::styled(
                    truncate(&format!("{} - editing", task.index), width),
                    Style::default()
                        .fg(colors.editing)
                        .add_modifier(Modifier::BOLD),
                ));
                ListItem::new(vec![
                    header,
                    input_line(
                        "  Name: ",
                        &session.draft_name,
                        editor_focus == InputField::Name,
                        width,
                        colors,
                    ),
                    input_line(
                        "  Sub:  ",
                        &session.draft_subscript,
                        editor_focus == InputField::Subscript,
                        width,
                        colors,
                    ),
                ])
            }
        })
        .collect()
}
