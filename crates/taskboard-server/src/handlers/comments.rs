use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use sqlx::SqliteConnection;
use taskboard_shared::{
    api::{CreateCommentRequest, MessageResponse, UpdateCommentRequest},
    Comment,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::routes::AppState;

/// Helper to verify the owning task exists
async fn verify_task(conn: &mut SqliteConnection, task_id: Uuid) -> Result<(), AppError> {
    let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM tasks WHERE id = ?")
        .bind(task_id)
        .fetch_optional(&mut *conn)
        .await?;

    if exists.is_none() {
        return Err(AppError::NotFound("Task"));
    }
    Ok(())
}

/// GET /api/v1/tasks/:task_id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<Uuid>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let mut tx = state.db.begin().await?;
    verify_task(&mut tx, task_id).await?;

    let comments: Vec<Comment> = sqlx::query_as(
        r#"
        SELECT id, task_id, text, author, created_at, updated_at
        FROM comments
        WHERE task_id = ?
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(task_id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Json(comments))
}

/// POST /api/v1/tasks/:task_id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<Uuid>,
    AppJson(req): AppJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let new = req.validate()?;

    let now = Utc::now();
    let comment = Comment {
        id: Uuid::new_v4(),
        task_id,
        text: new.text,
        author: new.author,
        created_at: now,
        updated_at: now,
    };

    let mut tx = state.db.begin().await?;

    // Task check and insert stay one statement: the write lock is taken
    // before the task row is read.
    let result = sqlx::query(
        r#"
        INSERT INTO comments (id, task_id, text, author, created_at, updated_at)
        SELECT ?, ?, ?, ?, ?, ?
        WHERE EXISTS (SELECT 1 FROM tasks WHERE id = ?)
        "#,
    )
    .bind(comment.id)
    .bind(comment.task_id)
    .bind(&comment.text)
    .bind(&comment.author)
    .bind(comment.created_at)
    .bind(comment.updated_at)
    .bind(task_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task"));
    }
    tx.commit().await?;

    tracing::info!(comment_id = %comment.id, task_id = %task_id, "Comment created");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// PUT /api/v1/comments/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    AppPath(comment_id): AppPath<Uuid>,
    AppJson(req): AppJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let changes = req.validate()?;
    let (replace_author, author) = match changes.author {
        Some(author) => (true, author),
        None => (false, None),
    };

    let mut tx = state.db.begin().await?;

    let comment: Option<Comment> = sqlx::query_as(
        r#"
        UPDATE comments
        SET text = ?,
            author = CASE WHEN ? THEN ? ELSE author END,
            updated_at = ?
        WHERE id = ?
        RETURNING id, task_id, text, author, created_at, updated_at
        "#,
    )
    .bind(&changes.text)
    .bind(replace_author)
    .bind(author)
    .bind(Utc::now())
    .bind(comment_id)
    .fetch_optional(&mut *tx)
    .await?;

    let comment = comment.ok_or(AppError::NotFound("Comment"))?;
    tx.commit().await?;

    tracing::info!(comment_id = %comment_id, "Comment updated");
    Ok(Json(comment))
}

/// DELETE /api/v1/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    AppPath(comment_id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut tx = state.db.begin().await?;

    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(comment_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Comment"));
    }
    tx.commit().await?;

    tracing::info!(comment_id = %comment_id, "Comment deleted");
    Ok(Json(MessageResponse::deleted()))
}
