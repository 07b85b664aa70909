use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::theme::ThemeColors;

/// 在屏幕底部居中显示 Toast 消息
pub fn render(frame: &mut Frame, message: &str, warning: bool, colors: &ThemeColors) {
    let area = frame.area();

    let toast_width = (message.width() + 6).min(area.width.saturating_sub(4) as usize) as u16;
    let toast_height = 3;
    let toast_x = area.x + area.width.saturating_sub(toast_width) / 2;
    // 悬浮在 footer 上方
    let toast_y = area.y + area.height.saturating_sub(toast_height + 3);

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height.min(area.height));

    frame.render_widget(Clear, toast_area);

    let border = if warning { colors.warning } else { colors.highlight };
    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}
