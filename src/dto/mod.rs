use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod answer_dto;
pub mod question_dto;
pub mod user_dto;

/// `{id, status}` body returned by every create/edit/delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub id: String,
    pub status: String,
}

impl StatusResponse {
    pub fn new(id: impl Into<String>, status: &str) -> Self {
        Self {
            id: id.into(),
            status: status.to_string(),
        }
    }
}
