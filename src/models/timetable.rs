//! Timetable document model.

use serde::{Deserialize, Serialize};

/// A generated timetable stored in the `Timetable` collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Timetable {
    #[serde(rename = "_id")]
    pub doc_id: String,
    #[serde(rename = "Timetable")]
    pub timetable: serde_json::Value,
}

/// Request body for `POST /SaveTimetable`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTimetableRequest {
    #[serde(rename = "finalOut", default)]
    pub final_out: serde_json::Value,
}

/// Response body for `GET /getTT`.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub tt: Vec<Timetable>,
}
