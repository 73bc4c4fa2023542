use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;

use todo_rest_api::config::Config;
use todo_rest_api::repository::database::Database;
use todo_rest_api::repository::{PgTodoRepository, TodoRepository};
use todo_rest_api::service::{TodoService, TodoServiceImpl};
use todo_rest_api::{api, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    telemetry::init_subscriber(env!("CARGO_PKG_NAME")).context("installing tracing subscriber")?;

    let db = Database::connect(&config).context("connecting to database")?;
    let repository: Arc<dyn TodoRepository> = Arc::new(PgTodoRepository::new(db));
    let service: Arc<dyn TodoService> = Arc::new(TodoServiceImpl::new(repository));
    let service_data = web::Data::from(service);

    tracing::info!(host = %config.server_host, port = config.server_port, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(service_data.clone())
            .configure(api::config)
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await?;

    Ok(())
}
