use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::database::store::{QuestionStore, UserStore};
use crate::error::{Error, Result};
use crate::models::question::{NewQuestion, Question};
use crate::models::user::Capability;
use crate::services::auth_service::AuthService;

const QUESTION_NOT_FOUND: &str = "Entered question uuid does not exist";

#[derive(Clone)]
pub struct QuestionService {
    auth: AuthService,
    users: Arc<dyn UserStore>,
    questions: Arc<dyn QuestionStore>,
}

impl QuestionService {
    pub fn new(
        auth: AuthService,
        users: Arc<dyn UserStore>,
        questions: Arc<dyn QuestionStore>,
    ) -> Self {
        Self {
            auth,
            users,
            questions,
        }
    }

    /// Posts a question owned by the caller. Blank content is rejected by the
    /// store as a constraint violation.
    pub async fn create_question(&self, content: String, authorization: &str) -> Result<Question> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to post a question",
            )
            .await?;

        let question = self
            .questions
            .create_question(NewQuestion {
                uuid: Uuid::new_v4().to_string(),
                content,
                date: Utc::now(),
                user_id: user.id,
            })
            .await?;

        tracing::info!(question_uuid = %question.uuid, owner = %user.uuid, "question created");
        Ok(question)
    }

    pub async fn list_all_questions(&self, authorization: &str) -> Result<Vec<Question>> {
        self.auth
            .validate(
                authorization,
                "User is signed out.Sign in first to get all questions",
            )
            .await?;
        self.questions.list_questions().await
    }

    pub async fn list_questions_by_user(
        &self,
        user_uuid: &str,
        authorization: &str,
    ) -> Result<Vec<Question>> {
        self.auth
            .validate(
                authorization,
                "User is signed out.Sign in first to get all questions posted by a specific user",
            )
            .await?;

        let owner = self
            .users
            .find_user_by_uuid(user_uuid)
            .await?
            .ok_or_else(|| {
                Error::user_not_found(
                    "User with entered uuid whose question details are to be seen does not exist",
                )
            })?;

        self.questions.list_questions_by_user(owner.id).await
    }

    /// Only the owner may change a question's content.
    pub async fn edit_question(
        &self,
        content: String,
        question_uuid: &str,
        authorization: &str,
    ) -> Result<Question> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to edit the question",
            )
            .await?;

        let mut question = self
            .questions
            .find_question_by_uuid(question_uuid)
            .await?
            .ok_or_else(|| Error::question_not_found(QUESTION_NOT_FOUND))?;

        if !question.is_owned_by(&user) {
            tracing::warn!(question_uuid, caller = %user.uuid, "edit rejected: not the owner");
            return Err(Error::forbidden(
                "Only the question owner can edit the question",
            ));
        }

        question.content = content;
        let updated = self.questions.update_question(question).await?;
        tracing::info!(question_uuid = %updated.uuid, "question edited");
        Ok(updated)
    }

    /// The owner or an admin may delete a question. Returns its uuid.
    pub async fn delete_question(&self, question_uuid: &str, authorization: &str) -> Result<String> {
        let (user, _) = self
            .auth
            .validate(
                authorization,
                "User is signed out.Sign in first to delete a question",
            )
            .await?;

        let question = self
            .questions
            .find_question_by_uuid(question_uuid)
            .await?
            .ok_or_else(|| Error::question_not_found(QUESTION_NOT_FOUND))?;

        if !(question.is_owned_by(&user) || user.can(Capability::DeleteAnyPost)) {
            tracing::warn!(question_uuid, caller = %user.uuid, "delete rejected: not owner or admin");
            return Err(Error::forbidden(
                "Only the question owner or admin can delete the question",
            ));
        }

        self.questions.delete_question(question.id).await?;
        tracing::info!(question_uuid = %question.uuid, by = %user.uuid, "question deleted");
        Ok(question.uuid)
    }
}
