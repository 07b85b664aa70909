//! Add Task 弹窗组件

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, input_line, render_dialog_frame, render_hint};
use super::InputField;
use crate::theme::ThemeColors;

/// Add Task 弹窗数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskDialogData {
    /// 任务名称输入
    pub name: String,
    /// 副标题输入
    pub subscript: String,
    /// 当前焦点
    pub focus: InputField,
}

impl AddTaskDialogData {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Name => &mut self.name,
            InputField::Subscript => &mut self.subscript,
        }
    }

    /// 输入字符
    pub fn input_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// 删除字符
    pub fn delete_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn name_is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// 渲染 Add Task 弹窗
pub fn render(frame: &mut Frame, data: &AddTaskDialogData, colors: &ThemeColors) {
    let area = center_dialog(frame.area(), 56, 9);
    let inner = render_dialog_frame(frame, area, " Add To-Do Task ", colors.highlight, colors);

    // 空行 + 名称 + 副标题 + 空行 + 提示
    let [_, name_area, subscript_area, status_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let width = inner.width as usize;
    frame.render_widget(
        Paragraph::new(input_line(
            "  Task Name: ",
            &data.name,
            data.focus == InputField::Name,
            width,
            colors,
        )),
        name_area,
    );
    frame.render_widget(
        Paragraph::new(input_line(
            "  Subscript: ",
            &data.subscript,
            data.focus == InputField::Subscript,
            width,
            colors,
        )),
        subscript_area,
    );

    if data.name_is_blank() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "  (enter task name)",
                Style::default().fg(colors.muted),
            )),
            status_area,
        );
    }

    render_hint(
        frame,
        hint_area,
        &[("Enter", "add"), ("Tab", "switch"), ("Esc", "cancel")],
        colors,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut data = AddTaskDialogData::new();
        for c in "Buy milk".chars() {
            data.input_char(c);
        }
        data.toggle_focus();
        data.input_char('2');
        data.input_char('%');
        data.input_char('!');
        data.delete_char();

        assert_eq!(data.name, "Buy milk");
        assert_eq!(data.subscript, "2%");
        assert_eq!(data.focus, InputField::Subscript);
    }

    #[test]
    fn test_blank_name() {
        let mut data = AddTaskDialogData::new();
        assert!(data.name_is_blank());
        data.input_char(' ');
        assert!(data.name_is_blank());
        data.input_char('x');
        assert!(!data.name_is_blank());
    }
}
