use serde::Serialize;

use crate::models::developermodel::Developer;
use crate::models::taskmodel::Task;

/// A task joined with the developer running it, when that link is set.
#[derive(Debug, Serialize)]
pub struct TaskData {
    pub task: Task,
    pub developer: Option<Developer>,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponseDto {
    pub status: String,
    pub tasks: Vec<TaskData>,
    pub results: i64,
}
