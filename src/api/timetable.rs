//! Timetable endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{MessageResponse, SaveTimetableRequest, TimetableResponse};
use crate::AppState;

/// POST /SaveTimetable - Create or replace the stored timetable.
pub async fn save_timetable(
    State(state): State<AppState>,
    Json(request): Json<SaveTimetableRequest>,
) -> ApiResult<MessageResponse> {
    let outcome = state
        .repo
        .save_timetable(&request.final_out)
        .await
        .map_err(|e| e.context("Error saving timetable"))?;

    tracing::debug!(?outcome, "Timetable saved");
    success(MessageResponse::new("Time Table updated successfully"))
}

/// GET /getTT - List timetable documents.
pub async fn get_timetable(State(state): State<AppState>) -> ApiResult<TimetableResponse> {
    let tt = state.repo.list_timetables().await?;
    success(TimetableResponse { tt })
}
