use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::{parse::NO_RECORD_FOUND, ApiError};
use crate::models::todo::{DeleteResult, Todo};
use crate::repository::TodoRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    todos: Vec<Todo>,
}

/// Keeps todos in process memory. Ids are assigned from 1 upwards and never
/// reused, the same as a `BIGSERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ApiError> {
        self.store.lock().map_err(|_| {
            tracing::error!("in-memory todo store lock poisoned");
            ApiError::server_error()
        })
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(NO_RECORD_FOUND.to_string())
}

impl TodoRepository for InMemoryTodoRepository {
    fn create_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let mut store = self.lock()?;
        store.next_id += 1;
        let todo = Todo {
            id: store.next_id,
            ..todo.clone()
        };
        store.todos.push(todo.clone());
        Ok(todo)
    }

    fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let mut store = self.lock()?;
        let existing = store
            .todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or_else(not_found)?;
        *existing = todo.clone();
        Ok(existing.clone())
    }

    fn get_todo_by_id(&self, todo_id: i64) -> Result<Todo, ApiError> {
        let store = self.lock()?;
        store
            .todos
            .iter()
            .find(|t| t.id == todo_id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn get_all_todos(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.lock()?.todos.clone())
    }

    fn delete_todo_by_id(&self, todo_id: i64) -> Result<DeleteResult, ApiError> {
        let mut store = self.lock()?;
        let before = store.todos.len();
        store.todos.retain(|t| t.id != todo_id);
        Ok(DeleteResult::success(before - store.todos.len()))
    }
}
