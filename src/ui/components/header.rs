use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 屏幕标题
pub const TITLE: &str = "To-Do-List";

/// Header 总高度：1 (边框) + 1 (上边距) + 1 (标题) + 1 (信息行) = 4
pub const HEADER_HEIGHT: u16 = 4;

/// 渲染顶部区域（标题 + 任务数量）
pub fn render(frame: &mut Frame, area: Rect, task_count: usize, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [_, title_area, info_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let count = Paragraph::new(Line::from(Span::styled(
        format!("{} ", task_count_label(task_count)),
        Style::default().fg(colors.muted),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(count, info_area);
}

fn task_count_label(count: usize) -> String {
    match count {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}
