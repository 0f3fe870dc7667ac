//! `/students` routes.

use super::error::ApiResult;
use super::AppState;
use crate::model::{Student, StudentCreate, StudentId, StudentUpdate};
use crate::student_actor::StudentError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use record_actor::RecordClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students/", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// GET /students/
async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.students.fetch_all().await?))
}

/// GET /students/{id}
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> ApiResult<Json<Student>> {
    let student = state
        .students
        .fetch(id)
        .await?
        .ok_or(StudentError::NotFound(id))?;
    Ok(Json(student))
}

/// POST /students/
async fn create_student(
    State(state): State<AppState>,
    Json(params): Json<StudentCreate>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let student = state.students.create_student(params).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /students/{id}
async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(update): Json<StudentUpdate>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.students.modify(id, update).await?))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.students.remove(id).await?))
}
