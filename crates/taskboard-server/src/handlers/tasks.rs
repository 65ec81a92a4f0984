use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use taskboard_shared::{
    api::{CreateTaskRequest, MessageResponse},
    Task,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::routes::AppState;

/// GET /api/v1/tasks
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks: Vec<Task> = sqlx::query_as(
        r#"
        SELECT id, title, created_at, updated_at
        FROM tasks
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(tasks))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let title = req.validate()?;

    let now = Utc::now();
    let task = Task {
        id: Uuid::new_v4(),
        title,
        created_at: now,
        updated_at: now,
    };

    let mut tx = state.db.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO tasks (id, title, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(task.created_at)
    .bind(task.updated_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(task_id = %task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks/:task_id
pub async fn get_task(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<Task>, AppError> {
    let task: Option<Task> = sqlx::query_as(
        "SELECT id, title, created_at, updated_at FROM tasks WHERE id = ?",
    )
    .bind(task_id)
    .fetch_optional(&state.db)
    .await?;

    task.map(Json).ok_or(AppError::NotFound("Task"))
}

/// DELETE /api/v1/tasks/:task_id
///
/// Comments on the task go with it.
pub async fn delete_task(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut tx = state.db.begin().await?;

    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task"));
    }
    tx.commit().await?;

    tracing::info!(task_id = %task_id, "Task deleted");
    Ok(Json(MessageResponse::deleted()))
}
