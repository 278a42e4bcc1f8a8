//! Teacher directory endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTeacherRequest, MessageResponse, TeacherIdRequest, TeachersResponse};
use crate::AppState;

/// GET /getTeachers - List all teachers.
pub async fn list_teachers(State(state): State<AppState>) -> ApiResult<TeachersResponse> {
    let teachers = state.repo.list_teachers().await?;
    success(TeachersResponse { teachers })
}

/// POST /checkTeacherID - Report whether a teacher ID is taken.
pub async fn check_teacher_id(
    State(state): State<AppState>,
    Json(request): Json<TeacherIdRequest>,
) -> ApiResult<MessageResponse> {
    let message = if state.repo.teacher_exists(request.teacher_id).await? {
        "ID already exist"
    } else {
        "ID not exist"
    };
    success(MessageResponse::new(message))
}

/// POST /createTeacher - Add a teacher.
///
/// The ID is not checked for uniqueness; clients call `/checkTeacherID` first.
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(request): Json<CreateTeacherRequest>,
) -> ApiResult<MessageResponse> {
    let teacher = state.repo.create_teacher(&request.teacher_details).await?;
    tracing::debug!(id = teacher.id, doc_id = %teacher.doc_id, "Teacher created");
    success(MessageResponse::new("Teacher added successfully"))
}

/// POST /deleteTeacher - Remove the first teacher with the given ID.
pub async fn delete_teacher(
    State(state): State<AppState>,
    Json(request): Json<TeacherIdRequest>,
) -> ApiResult<MessageResponse> {
    if !state.repo.delete_teacher(request.teacher_id).await? {
        return Err(AppError::NotFound(
            "Teacher Not Found or Already Deleted".to_string(),
        ));
    }
    tracing::debug!(id = request.teacher_id, "Teacher deleted");
    success(MessageResponse::new("Teacher Deleted Successfully"))
}
