use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::todo;
use crate::errors::ErrorBody;
use crate::models::todo::{DeleteResult, Todo};

pub const DOC_URL: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Example Swagger TODO Rest API",
        description = "Documentation of TODO Rest API",
        version = "1.0"
    ),
    paths(
        todo::create_todo,
        todo::get_all_todos,
        todo::get_todo_by_id,
        todo::update_todo,
        todo::delete_todo_by_id
    ),
    components(schemas(Todo, DeleteResult, ErrorBody)),
    tags((name = "todo", description = "Todo management"))
)]
pub struct ApiDoc;

/// Swagger UI under `/swagger/`, backed by the generated document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger/{_:.*}").url(DOC_URL, ApiDoc::openapi())
}
