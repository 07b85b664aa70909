use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    add_task_dialog, empty_state, footer, header, help_panel, task_list, theme_selector, toast,
};
use footer::FooterContext;

/// 渲染唯一的列表页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(frame, header_area, app.store.len(), colors);

    if app.store.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(
            frame,
            list_area,
            &app.store,
            app.list_state.selected(),
            app.editor_focus,
            colors,
        );
    }

    let footer_context = if app.is_editing() {
        FooterContext::Editing
    } else {
        FooterContext::List {
            has_items: !app.store.is_empty(),
        }
    };
    footer::render(frame, footer_area, footer_context, colors);

    // 渲染 Add Task 弹窗（如果打开）
    if let Some(ref data) = app.add_dialog {
        add_task_dialog::render(frame, data, colors);
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, colors);
    }

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, t.warning, colors);
        }
    }
}
