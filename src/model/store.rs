//! 任务列表 Store
//!
//! 整个应用唯一的数据源：有序任务列表 + 当前编辑 session。
//! 每次成功的修改都会通过 mpsc 通道广播一个 [`StoreEvent`]，
//! UI 层订阅后自行决定如何刷新。查找不到 ID、空名称添加等情况一律静默忽略。

use std::sync::mpsc::{self, Receiver, Sender};

use super::task::{EditSession, Task, TaskId, TaskView};

/// Store 变更事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    EditStarted(TaskId),
    Edited(TaskId),
    EditCancelled(TaskId),
    Deleted(TaskId),
}

#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    editing: Option<EditSession>,
    /// 下一个分配的 ID，只增不减
    next_id: u32,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 订阅变更事件
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, event: StoreEvent) {
        tracing::debug!(?event, tasks = self.tasks.len(), "store changed");
        // 接收端已 drop 的订阅者直接移除
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // ========== Queries ==========

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 任务在列表中的位置
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// 行内编辑器输入时修改草稿
    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.task_id == id)
    }

    /// 按显示顺序返回每一行的视图
    pub fn views(&self) -> impl Iterator<Item = TaskView<'_>> {
        self.tasks.iter().map(move |task| match &self.editing {
            Some(session) if session.task_id == task.id => TaskView::Editing(task, session),
            _ => TaskView::Viewing(task),
        })
    }

    // ========== Mutations ==========

    /// 添加任务，名称为空白时不做任何事并返回 None
    pub fn add(&mut self, name: impl Into<String>, subscript: impl Into<String>) -> Option<TaskId> {
        let name = name.into();
        if name.trim().is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task {
            id,
            index: self.tasks.len() as u32 + 1,
            name,
            subscript: subscript.into(),
        });
        self.publish(StoreEvent::Added(id));
        Some(id)
    }

    /// 进入编辑模式，同时结束其他任务的编辑
    pub fn begin_edit(&mut self, id: TaskId) {
        if self.is_editing(id) {
            return;
        }
        let Some(task) = self.get(id) else { return };
        let session = EditSession::for_task(task);

        if let Some(previous) = self.editing.replace(session) {
            self.publish(StoreEvent::EditCancelled(previous.task_id));
        }
        self.publish(StoreEvent::EditStarted(id));
    }

    /// 完成编辑：先清除编辑状态，再更新目标任务
    ///
    /// 与 [`add`](Self::add) 不同，这里不校验名称是否为空。
    pub fn complete_edit(
        &mut self,
        id: TaskId,
        name: impl Into<String>,
        subscript: impl Into<String>,
    ) {
        let cleared = self.editing.take();

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            if let Some(session) = cleared {
                self.publish(StoreEvent::EditCancelled(session.task_id));
            }
            return;
        };
        task.name = name.into();
        task.subscript = subscript.into();

        if let Some(session) = cleared.filter(|s| s.task_id != id) {
            self.publish(StoreEvent::EditCancelled(session.task_id));
        }
        self.publish(StoreEvent::Edited(id));
    }

    /// 放弃草稿，退出编辑模式
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            self.publish(StoreEvent::EditCancelled(session.task_id));
        }
    }

    /// 删除任务，其余任务的 id / index 保持不变
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        let removed = self.tasks.remove(pos);

        if self.is_editing(id) {
            self.editing = None;
            self.publish(StoreEvent::EditCancelled(id));
        }
        self.publish(StoreEvent::Deleted(id));
        Some(removed)
    }
}
