//! 任务数据模型

/// 任务 ID（由 store 的计数器分配，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

/// 单条待办
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// 创建时的序号 (列表长度 + 1)，仅用于显示，删除前面的任务后不会重排
    pub index: u32,
    pub name: String,
    /// 副标题，可以为空
    pub subscript: String,
}

impl Task {
    /// 行标题: "{index} - {name}"
    pub fn title(&self) -> String {
        format!("{} - {}", self.index, self.name)
    }

    pub fn has_subscript(&self) -> bool {
        !self.subscript.is_empty()
    }
}

/// 正在编辑的任务及其草稿内容
///
/// Store 中最多只有一个 session，因此"同时只有一个任务处于编辑状态"
/// 由类型本身保证。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft_name: String,
    pub draft_subscript: String,
}

impl EditSession {
    pub(crate) fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft_name: task.name.clone(),
            draft_subscript: task.subscript.clone(),
        }
    }
}

/// 渲染用视图：普通行或行内编辑器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskView<'a> {
    Viewing(&'a Task),
    Editing(&'a Task, &'a EditSession),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(index: u32, name: &str, subscript: &str) -> Task {
        Task {
            id: TaskId(index),
            index,
            name: name.to_string(),
            subscript: subscript.to_string(),
        }
    }

    #[test]
    fn test_title_uses_index() {
        let t = task(3, "Buy milk", "");
        assert_eq!(t.title(), "3 - Buy milk");
        assert!(!t.has_subscript());
    }

    #[test]
    fn test_edit_session_seeds_drafts() {
        let t = task(1, "Buy milk", "2%");
        let session = EditSession::for_task(&t);
        assert_eq!(session.task_id, TaskId(1));
        assert_eq!(session.draft_name, "Buy milk");
        assert_eq!(session.draft_subscript, "2%");
    }
}
