//! Teacher record model.

use serde::{Deserialize, Serialize};

/// A teacher stored in the `TeachersList` collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Teacher {
    /// Store-assigned document key
    #[serde(rename = "_id")]
    pub doc_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    /// External teacher number; not unique at the store level
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Subjects")]
    pub subjects: Vec<String>,
}

/// Teacher fields supplied by the client on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherDetails {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Subjects", default, deserialize_with = "super::null_as_empty")]
    pub subjects: Vec<String>,
}

/// Request body for `POST /createTeacher`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    #[serde(rename = "TeacherDetails")]
    pub teacher_details: TeacherDetails,
}

/// Request body for `POST /checkTeacherID` and `POST /deleteTeacher`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherIdRequest {
    #[serde(rename = "TeacherID")]
    pub teacher_id: i64,
}

/// Response body for `GET /getTeachers`.
#[derive(Debug, Serialize)]
pub struct TeachersResponse {
    pub teachers: Vec<Teacher>,
}
