use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::errors::{ApiError, ErrorBody};
use crate::models::todo::{parse_todo_id, DeleteResult, Todo};
use crate::service::TodoService;

type JsonBody = Result<web::Json<Todo>, actix_web::Error>;

fn invalid_json_body() -> ApiError {
    ApiError::BadRequest("invalid json body".to_string())
}

#[utoipa::path(
    post,
    path = "/todo",
    tag = "todo",
    request_body = Todo,
    responses(
        (status = 201, description = "todo created", body = Todo),
        (status = 400, description = "invalid json body or missing field", body = ErrorBody),
        (status = 500, description = "persistence failure", body = ErrorBody)
    )
)]
#[post("/todo")]
pub async fn create_todo(
    service: web::Data<dyn TodoService>,
    body: JsonBody,
) -> Result<HttpResponse, ApiError> {
    let todo = body.map_err(|_| invalid_json_body())?.into_inner();
    let service = service.into_inner();
    let created = web::block(move || service.create_todo(todo)).await??;
    tracing::info!(todo_id = created.id, "todo created");
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "todo id")),
    request_body = Todo,
    responses(
        (status = 200, description = "todo updated", body = Todo),
        (status = 400, description = "invalid id, json body or missing field", body = ErrorBody),
        (status = 404, description = "no todo with this id", body = ErrorBody),
        (status = 500, description = "persistence failure", body = ErrorBody)
    )
)]
#[put("/todo/{id}")]
pub async fn update_todo(
    service: web::Data<dyn TodoService>,
    id: web::Path<String>,
    body: JsonBody,
) -> Result<HttpResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    let mut todo = body.map_err(|_| invalid_json_body())?.into_inner();
    todo.id = todo_id;
    let service = service.into_inner();
    let updated = web::block(move || service.update_todo(todo)).await??;
    tracing::info!(todo_id, "todo updated");
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    get,
    path = "/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "todo id")),
    responses(
        (status = 200, description = "todo found", body = Todo),
        (status = 400, description = "invalid id", body = ErrorBody),
        (status = 404, description = "no todo with this id", body = ErrorBody),
        (status = 500, description = "persistence failure", body = ErrorBody)
    )
)]
#[get("/todo/{id}")]
pub async fn get_todo_by_id(
    service: web::Data<dyn TodoService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    let service = service.into_inner();
    let todo = web::block(move || service.get_todo_by_id(todo_id)).await??;
    Ok(HttpResponse::Ok().json(todo))
}

#[utoipa::path(
    get,
    path = "/todo",
    tag = "todo",
    responses(
        (status = 200, description = "all todos, possibly none", body = [Todo]),
        (status = 500, description = "persistence failure", body = ErrorBody)
    )
)]
#[get("/todo")]
pub async fn get_all_todos(service: web::Data<dyn TodoService>) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();
    let todos = web::block(move || service.get_all_todos()).await??;
    tracing::debug!(count = todos.len(), "todos listed");
    Ok(HttpResponse::Ok().json(todos))
}

#[utoipa::path(
    delete,
    path = "/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "todo id")),
    responses(
        (status = 200, description = "delete ran, affected_row may be 0", body = DeleteResult),
        (status = 400, description = "invalid id", body = ErrorBody),
        (status = 500, description = "persistence failure", body = ErrorBody)
    )
)]
#[delete("/todo/{id}")]
pub async fn delete_todo_by_id(
    service: web::Data<dyn TodoService>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let todo_id = parse_todo_id(&id)?;
    let service = service.into_inner();
    let result = web::block(move || service.delete_todo_by_id(todo_id)).await??;
    tracing::info!(todo_id, affected_row = result.affected_row, "todo deleted");
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "rejected request body");
            invalid_json_body().into()
        });
    cfg.app_data(json_config)
        .service(create_todo)
        .service(get_all_todos)
        .service(get_todo_by_id)
        .service(update_todo)
        .service(delete_todo_by_id);
}
