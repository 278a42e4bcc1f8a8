//! Subject catalog model.

use serde::{Deserialize, Serialize};

/// The subject list and section mapping stored in the `SubjectsList` collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubjectCatalog {
    #[serde(rename = "_id")]
    pub doc_id: String,
    #[serde(rename = "Subjects")]
    pub subjects: Vec<String>,
    /// Owned by the client; stored without interpretation.
    #[serde(rename = "Sections")]
    pub sections: serde_json::Value,
}

/// Request body for `POST /subjectsList`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSubjectsRequest {
    #[serde(
        rename = "subjectsList11and12",
        default,
        deserialize_with = "super::null_as_empty"
    )]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub sections: serde_json::Value,
}

/// Response body for `GET /getSubjectsList`.
#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub subs: Vec<SubjectCatalog>,
}
