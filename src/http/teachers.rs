//! `/teachers` routes.

use super::error::ApiResult;
use super::AppState;
use crate::model::{Teacher, TeacherCreate, TeacherId, TeacherUpdate};
use crate::teacher_actor::TeacherError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use record_actor::RecordClient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/teachers/", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}

async fn list_teachers(State(state): State<AppState>) -> ApiResult<Json<Vec<Teacher>>> {
    Ok(Json(state.teachers.fetch_all().await?))
}

async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> ApiResult<Json<Teacher>> {
    let teacher = state
        .teachers
        .fetch(id)
        .await?
        .ok_or(TeacherError::NotFound(id))?;
    Ok(Json(teacher))
}

async fn create_teacher(
    State(state): State<AppState>,
    Json(params): Json<TeacherCreate>,
) -> ApiResult<(StatusCode, Json<Teacher>)> {
    let teacher = state.teachers.create_teacher(params).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
    Json(update): Json<TeacherUpdate>,
) -> ApiResult<Json<Teacher>> {
    Ok(Json(state.teachers.modify(id, update).await?))
}

async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> ApiResult<Json<Teacher>> {
    Ok(Json(state.teachers.remove(id).await?))
}
