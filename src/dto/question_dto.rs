use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::question::Question;

/// Body of both question create and edit requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDetailsResponse {
    pub id: String,
    pub content: String,
}

impl From<Question> for QuestionDetailsResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.uuid,
            content: value.content,
        }
    }
}
