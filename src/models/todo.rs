use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;

pub const STATUS_DELETE_SUCCESS: &str = "Success";

/// A todo item as stored in the `todos` table and exchanged over HTTP.
///
/// Every field falls back to its default when absent or `null` in a request
/// body, so a missing `title` or `description` is reported by
/// [`Todo::validate`] rather than by the JSON binder.
#[derive(
    Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Queryable, Selectable, ToSchema,
)]
#[diesel(table_name = crate::repository::schema::todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(default)]
pub struct Todo {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 1)]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Make Dinner")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Cook fried rice with egg and chicken")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = false)]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

impl<'a> From<&'a Todo> for NewTodo<'a> {
    fn from(todo: &'a Todo) -> Self {
        Self {
            title: &todo.title,
            description: &todo.description,
            completed: todo.completed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct DeleteResult {
    #[schema(example = "Success")]
    pub status_delete: String,
    #[schema(example = 1)]
    pub affected_row: usize,
}

impl DeleteResult {
    pub fn success(affected_row: usize) -> Self {
        Self {
            status_delete: STATUS_DELETE_SUCCESS.to_string(),
            affected_row,
        }
    }
}

impl Todo {
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    /// Presence checks only. `title` is checked before `description`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::BadRequest("title is required".to_string()));
        }
        if self.description.is_empty() {
            return Err(ApiError::BadRequest("description is required".to_string()));
        }
        Ok(())
    }
}

pub fn parse_todo_id(param: &str) -> Result<i64, ApiError> {
    param
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("invalid todo id params".to_string()))
}
