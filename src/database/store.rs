//! Persistence gateway used by the services.
//!
//! Every method runs as a single statement against the store, so each call is
//! its own transactional boundary. Field-level constraint failures surface as
//! [`Error::ConstraintViolation`](crate::error::Error::ConstraintViolation).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::answer::{Answer, NewAnswer};
use crate::models::question::{NewQuestion, Question};
use crate::models::user::{NewSession, NewUser, User, UserSession};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User>;
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn find_user_by_uuid(&self, uuid: &str) -> Result<Option<User>>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Removes the user together with their sessions, questions and answers.
    async fn delete_user(&self, id: i64) -> Result<()>;

    async fn create_session(&self, session: NewSession) -> Result<UserSession>;
    async fn find_session_by_token(&self, access_token: &str) -> Result<Option<UserSession>>;
    async fn end_session(&self, id: i64, logout_at: DateTime<Utc>) -> Result<UserSession>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn create_question(&self, question: NewQuestion) -> Result<Question>;
    async fn find_question_by_uuid(&self, uuid: &str) -> Result<Option<Question>>;
    async fn list_questions(&self) -> Result<Vec<Question>>;
    async fn list_questions_by_user(&self, user_id: i64) -> Result<Vec<Question>>;
    /// Merges the question's mutable fields into the stored row.
    async fn update_question(&self, question: Question) -> Result<Question>;
    async fn delete_question(&self, id: i64) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerStore: Send + Sync {
    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer>;
    async fn find_answer_by_uuid(&self, uuid: &str) -> Result<Option<Answer>>;
    async fn list_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>>;
    async fn update_answer(&self, answer: Answer) -> Result<Answer>;
    async fn delete_answer(&self, id: i64) -> Result<()>;
}
