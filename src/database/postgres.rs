use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::store::{AnswerStore, QuestionStore, UserStore};
use crate::error::Result;
use crate::models::answer::{Answer, NewAnswer};
use crate::models::question::{NewQuestion, Question};
use crate::models::user::{NewSession, NewUser, User, UserSession};

const USER_COLUMNS: &str = "id, uuid, first_name, last_name, username, email, password_hash, country, about_me, dob, role, contact_number";
const SESSION_COLUMNS: &str = "id, uuid, user_id, access_token, login_at, expires_at, logout_at";
const QUESTION_COLUMNS: &str = "id, uuid, content, date, user_id";
const ANSWER_COLUMNS: &str = "id, uuid, answer, date, user_id, question_id";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_user_where(&self, column: &str, value: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE {} = $1", USER_COLUMNS, column);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let query = format!(
            r#"
            INSERT INTO users (
                uuid, first_name, last_name, username, email, password_hash,
                country, about_me, dob, role, contact_number
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(&user.uuid)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.country)
            .bind(&user.about_me)
            .bind(&user.dob)
            .bind(user.role.as_str())
            .bind(&user.contact_number)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_uuid(&self, uuid: &str) -> Result<Option<User>> {
        self.find_user_where("uuid", uuid).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.find_user_where("username", username).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_user_where("email", email).await
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_session(&self, session: NewSession) -> Result<UserSession> {
        let query = format!(
            r#"
            INSERT INTO user_auth (uuid, user_id, access_token, login_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SESSION_COLUMNS
        );
        let created = sqlx::query_as::<_, UserSession>(&query)
            .bind(&session.uuid)
            .bind(session.user_id)
            .bind(&session.access_token)
            .bind(session.login_at)
            .bind(session.expires_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_session_by_token(&self, access_token: &str) -> Result<Option<UserSession>> {
        let query = format!(
            "SELECT {} FROM user_auth WHERE access_token = $1",
            SESSION_COLUMNS
        );
        let session = sqlx::query_as::<_, UserSession>(&query)
            .bind(access_token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(session)
    }

    async fn end_session(&self, id: i64, logout_at: DateTime<Utc>) -> Result<UserSession> {
        let query = format!(
            "UPDATE user_auth SET logout_at = $2 WHERE id = $1 RETURNING {}",
            SESSION_COLUMNS
        );
        let session = sqlx::query_as::<_, UserSession>(&query)
            .bind(id)
            .bind(logout_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(session)
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question> {
        let query = format!(
            r#"
            INSERT INTO question (uuid, content, date, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let created = sqlx::query_as::<_, Question>(&query)
            .bind(&question.uuid)
            .bind(&question.content)
            .bind(question.date)
            .bind(question.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_question_by_uuid(&self, uuid: &str) -> Result<Option<Question>> {
        let query = format!("SELECT {} FROM question WHERE uuid = $1", QUESTION_COLUMNS);
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let query = format!("SELECT {} FROM question ORDER BY id", QUESTION_COLUMNS);
        let questions = sqlx::query_as::<_, Question>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn list_questions_by_user(&self, user_id: i64) -> Result<Vec<Question>> {
        let query = format!(
            "SELECT {} FROM question WHERE user_id = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn update_question(&self, question: Question) -> Result<Question> {
        let query = format!(
            "UPDATE question SET content = $2 WHERE id = $1 RETURNING {}",
            QUESTION_COLUMNS
        );
        let updated = sqlx::query_as::<_, Question>(&query)
            .bind(question.id)
            .bind(&question.content)
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_question(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM question WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AnswerStore for PgStore {
    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer> {
        let query = format!(
            r#"
            INSERT INTO answer (uuid, answer, date, user_id, question_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            ANSWER_COLUMNS
        );
        let created = sqlx::query_as::<_, Answer>(&query)
            .bind(&answer.uuid)
            .bind(&answer.answer)
            .bind(answer.date)
            .bind(answer.user_id)
            .bind(answer.question_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_answer_by_uuid(&self, uuid: &str) -> Result<Option<Answer>> {
        let query = format!("SELECT {} FROM answer WHERE uuid = $1", ANSWER_COLUMNS);
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(answer)
    }

    async fn list_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let query = format!(
            "SELECT {} FROM answer WHERE question_id = $1 ORDER BY id",
            ANSWER_COLUMNS
        );
        let answers = sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(answers)
    }

    async fn update_answer(&self, answer: Answer) -> Result<Answer> {
        let query = format!(
            "UPDATE answer SET answer = $2 WHERE id = $1 RETURNING {}",
            ANSWER_COLUMNS
        );
        let updated = sqlx::query_as::<_, Answer>(&query)
            .bind(answer.id)
            .bind(&answer.answer)
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_answer(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM answer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
