use diesel::prelude::*;

#[cfg(test)]
use mockall::automock;

use crate::errors::ApiError;
use crate::models::todo::{DeleteResult, NewTodo, Todo};
use crate::repository::database::Database;
use crate::repository::schema::todos;

/// Data access for todos. Implementations translate their own failures into
/// [`ApiError`] so callers never see driver errors.
#[cfg_attr(test, automock)]
pub trait TodoRepository: Send + Sync {
    fn create_todo(&self, todo: &Todo) -> Result<Todo, ApiError>;
    fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError>;
    fn get_todo_by_id(&self, todo_id: i64) -> Result<Todo, ApiError>;
    fn get_all_todos(&self) -> Result<Vec<Todo>, ApiError>;
    /// Deleting an id that matches nothing is a success with `affected_row` 0.
    fn delete_todo_by_id(&self, todo_id: i64) -> Result<DeleteResult, ApiError>;
}

#[derive(Debug, Clone)]
pub struct PgTodoRepository {
    db: Database,
}

impl PgTodoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl TodoRepository for PgTodoRepository {
    fn create_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let mut conn = self.db.connection()?;
        let created = diesel::insert_into(todos::table)
            .values(NewTodo::from(todo))
            .returning(Todo::as_returning())
            .get_result(&mut conn)?;
        Ok(created)
    }

    fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let mut conn = self.db.connection()?;
        let updated = diesel::update(todos::table.find(todo.id))
            .set((
                todos::title.eq(&todo.title),
                todos::description.eq(&todo.description),
                todos::completed.eq(todo.completed),
            ))
            .returning(Todo::as_returning())
            .get_result(&mut conn)?;
        Ok(updated)
    }

    fn get_todo_by_id(&self, todo_id: i64) -> Result<Todo, ApiError> {
        let mut conn = self.db.connection()?;
        let todo = todos::table
            .find(todo_id)
            .select(Todo::as_select())
            .first(&mut conn)?;
        Ok(todo)
    }

    fn get_all_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let mut conn = self.db.connection()?;
        let all = todos::table
            .select(Todo::as_select())
            .order(todos::id.asc())
            .load(&mut conn)?;
        Ok(all)
    }

    fn delete_todo_by_id(&self, todo_id: i64) -> Result<DeleteResult, ApiError> {
        let mut conn = self.db.connection()?;
        let count = diesel::delete(todos::table.find(todo_id)).execute(&mut conn)?;
        Ok(DeleteResult::success(count))
    }
}
