use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::errors::ApiError;
use crate::models::todo::{DeleteResult, Todo};
use crate::repository::TodoRepository;

#[cfg_attr(test, automock)]
pub trait TodoService: Send + Sync {
    fn create_todo(&self, todo: Todo) -> Result<Todo, ApiError>;
    fn update_todo(&self, todo: Todo) -> Result<Todo, ApiError>;
    fn get_todo_by_id(&self, todo_id: i64) -> Result<Todo, ApiError>;
    fn get_all_todos(&self) -> Result<Vec<Todo>, ApiError>;
    fn delete_todo_by_id(&self, todo_id: i64) -> Result<DeleteResult, ApiError>;
}

/// Validates writes before handing them to the repository. Reads and deletes
/// go straight through.
#[derive(Clone)]
pub struct TodoServiceImpl {
    repository: Arc<dyn TodoRepository>,
}

impl TodoServiceImpl {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }
}

impl TodoService for TodoServiceImpl {
    fn create_todo(&self, todo: Todo) -> Result<Todo, ApiError> {
        todo.validate()?;
        self.repository.create_todo(&todo)
    }

    fn update_todo(&self, todo: Todo) -> Result<Todo, ApiError> {
        todo.validate()?;
        self.repository.update_todo(&todo)
    }

    fn get_todo_by_id(&self, todo_id: i64) -> Result<Todo, ApiError> {
        self.repository.get_todo_by_id(todo_id)
    }

    fn get_all_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.repository.get_all_todos()
    }

    fn delete_todo_by_id(&self, todo_id: i64) -> Result<DeleteResult, ApiError> {
        self.repository.delete_todo_by_id(todo_id)
    }
}
