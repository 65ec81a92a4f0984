use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::db::DbPool;
use crate::handlers::{comments as comment_handlers, tasks as task_handlers};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

pub fn create_router(db: DbPool) -> Router {
    let state = AppState { db };

    let task_routes = Router::new()
        .route(
            "/",
            get(task_handlers::list_tasks).post(task_handlers::create_task),
        )
        .route(
            "/:task_id",
            get(task_handlers::get_task).delete(task_handlers::delete_task),
        )
        .route(
            "/:task_id/comments",
            get(comment_handlers::list_comments).post(comment_handlers::create_comment),
        );

    // Comments are addressed by id alone once created
    let comment_routes = Router::new().route(
        "/:comment_id",
        put(comment_handlers::update_comment)
            .patch(comment_handlers::update_comment)
            .delete(comment_handlers::delete_comment),
    );

    let api_routes = Router::new()
        .nest("/tasks", task_routes)
        .nest("/comments", comment_routes);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
