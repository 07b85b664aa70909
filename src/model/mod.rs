pub mod store;
pub mod task;

pub use store::{StoreEvent, TaskListStore};
pub use task::{TaskId, TaskView};
