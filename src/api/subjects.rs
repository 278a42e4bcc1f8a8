//! Subject catalog endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{MessageResponse, SetSubjectsRequest, SubjectsResponse, Upserted};
use crate::AppState;

/// POST /subjectsList - Create or replace the subject catalog.
pub async fn set_subjects_list(
    State(state): State<AppState>,
    Json(request): Json<SetSubjectsRequest>,
) -> ApiResult<MessageResponse> {
    let outcome = state
        .repo
        .set_subjects(&request.subjects, &request.sections)
        .await
        .map_err(|e| e.context("Error saving subjects list"))?;

    let message = match outcome {
        Upserted::Created => "Subjects list created successfully",
        Upserted::Updated => "Subjects list updated successfully",
    };
    success(MessageResponse::new(message))
}

/// GET /getSubjectsList - List subject catalog documents.
pub async fn get_subjects_list(State(state): State<AppState>) -> ApiResult<SubjectsResponse> {
    let subs = state.repo.list_subjects().await?;
    success(SubjectsResponse { subs })
}
