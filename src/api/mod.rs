//! REST API module.
//!
//! Routes and JSON bodies follow the contract of the timetable frontend.

mod subjects;
mod teachers;
mod timetable;

pub use subjects::*;
pub use teachers::*;
pub use timetable::*;

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Response type that can be either a JSON body or an error.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
