use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::database::store::{AnswerStore, QuestionStore};
use crate::error::{Error, Result};
use crate::models::answer::{Answer, NewAnswer};
use crate::models::question::Question;
use crate::models::user::Capability;
use crate::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AnswerService {
    auth: AuthService,
    questions: Arc<dyn QuestionStore>,
    answers: Arc<dyn AnswerStore>,
}

impl AnswerService {
    pub fn new(
        auth: AuthService,
        questions: Arc<dyn QuestionStore>,
        answers: Arc<dyn AnswerStore>,
    ) -> Self {
        Self {
            auth,
            questions,
            answers,
        }
    }

    /// Answers an existing question. Nothing is written if the question is
    /// missing.
    pub async fn create_answer(
        &self,
        content: String,
        question_uuid: &str,
        authorization: &str,
    ) -> Result<Answer> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to post an answer",
            )
            .await?;

        let question = self
            .questions
            .find_question_by_uuid(question_uuid)
            .await?
            .ok_or_else(|| Error::question_not_found("The question entered is invalid"))?;

        let answer = self
            .answers
            .create_answer(NewAnswer {
                uuid: Uuid::new_v4().to_string(),
                answer: content,
                date: Utc::now(),
                user_id: user.id,
                question_id: question.id,
            })
            .await?;

        tracing::info!(answer_uuid = %answer.uuid, question_uuid = %question.uuid, "answer created");
        Ok(answer)
    }

    pub async fn edit_answer(
        &self,
        content: String,
        answer_uuid: &str,
        authorization: &str,
    ) -> Result<Answer> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to edit an answer",
            )
            .await?;

        let mut answer = self
            .answers
            .find_answer_by_uuid(answer_uuid)
            .await?
            .ok_or_else(Error::answer_not_found)?;

        if !answer.is_owned_by(&user) {
            tracing::warn!(answer_uuid, caller = %user.uuid, "edit rejected: not the owner");
            return Err(Error::forbidden("Only the answer owner can edit the answer"));
        }

        answer.answer = content;
        let updated = self.answers.update_answer(answer).await?;
        tracing::info!(answer_uuid = %updated.uuid, "answer edited");
        Ok(updated)
    }

    pub async fn delete_answer(&self, answer_uuid: &str, authorization: &str) -> Result<String> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to delete an answer",
            )
            .await?;

        let answer = self
            .answers
            .find_answer_by_uuid(answer_uuid)
            .await?
            .ok_or_else(Error::answer_not_found)?;

        if !(answer.is_owned_by(&user) || user.can(Capability::DeleteAnyPost)) {
            tracing::warn!(answer_uuid, caller = %user.uuid, "delete rejected: not owner or admin");
            return Err(Error::forbidden(
                "Only the answer owner or admin can delete the answer",
            ));
        }

        self.answers.delete_answer(answer.id).await?;
        tracing::info!(answer_uuid = %answer.uuid, by = %user.uuid, "answer deleted");
        Ok(answer.uuid)
    }

    /// Returns the question together with its answers, oldest first.
    pub async fn list_answers_to_question(
        &self,
        question_uuid: &str,
        authorization: &str,
    ) -> Result<(Question, Vec<Answer>)> {
        self.auth
            .validate(
                authorization,
                "User is signed out.Sign in first to get the answers",
            )
            .await?;

        let question = self
            .questions
            .find_question_by_uuid(question_uuid)
            .await?
            .ok_or_else(|| {
                Error::question_not_found(
                    "The question with entered uuid whose details are to be seen does not exist",
                )
            })?;

        let answers = self.answers.list_answers_by_question(question.id).await?;
        Ok((question, answers))
    }
}
