//! Dialog 组件共享工具函数

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::ThemeColors;

/// 计算居中 dialog 区域
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let x = frame_area.x + frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.y + frame_area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// 渲染 dialog 框架（带标题、边框）并返回内部可用区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染标准提示行
///
/// `hints` 格式为 [(快捷键, 描述), ...]
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let hint = Paragraph::new(hint_line(hints, colors)).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

pub fn hint_line(hints: &[(&str, &str)], colors: &ThemeColors) -> Line<'static> {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", Style::default().fg(colors.muted)));
            }
            v.push(Span::styled(
                key.to_string(),
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect();
    Line::from(spans)
}

/// 单行输入框: "{label}{value}▏"，未聚焦时不显示光标
pub fn input_line(
    label: &str,
    value: &str,
    focused: bool,
    max_width: usize,
    colors: &ThemeColors,
) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.muted)
    };

    // 输入过长时只显示末尾，保证光标可见
    let room = max_width.saturating_sub(label.width() + 1);
    let shown = if value.width() > room {
        let mut used = 0;
        let mut tail: Vec<char> = value
            .chars()
            .rev()
            .take_while(|c| {
                used += c.width().unwrap_or(0);
                used <= room
            })
            .collect();
        tail.reverse();
        tail.into_iter().collect()
    } else {
        value.to_string()
    };

    let mut spans = vec![
        Span::styled(label.to_string(), label_style),
        Span::styled(shown, Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(colors.highlight)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_colors;

    #[test]
    fn test_center_dialog() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_dialog(area, 60, 10), Rect::new(20, 15, 60, 10));
        // 比屏幕大时裁剪
        assert_eq!(center_dialog(area, 200, 50), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_input_line_keeps_tail_visible() {
        let colors = dark_colors();
        let line = input_line("Name: ", "abcdefghij", true, 10, &colors);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Name: hij▏");
    }

    #[test]
    fn test_input_line_tail_counts_columns() {
        let colors = dark_colors();
        let line = input_line("Name: ", "牛奶和", true, 10, &colors);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Name: 和▏");
    }

    #[test]
    fn test_input_line_unfocused_has_no_cursor() {
        let colors = dark_colors();
        let line = input_line("Sub: ", "2%", false, 40, &colors);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Sub: 2%");
    }
}
