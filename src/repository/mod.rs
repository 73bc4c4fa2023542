pub mod database;
pub mod memory;
pub mod schema;
pub mod todo_repository;

pub use todo_repository::{PgTodoRepository, TodoRepository};
