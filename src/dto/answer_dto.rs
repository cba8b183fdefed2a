use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::answer::Answer;
use crate::models::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerEditRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerDetailsResponse {
    pub id: String,
    pub question_content: String,
    pub answer_content: String,
}

impl AnswerDetailsResponse {
    pub fn list(question: &Question, answers: Vec<Answer>) -> Vec<Self> {
        answers
            .into_iter()
            .map(|answer| Self {
                id: answer.uuid,
                question_content: question.content.clone(),
                answer_content: answer.answer,
            })
            .collect()
    }
}
