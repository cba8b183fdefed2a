use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use quora_backend::{
    database::store::{AnswerStore, QuestionStore, UserStore},
    error::{Error, Result},
    models::{
        answer::{Answer, NewAnswer},
        question::{NewQuestion, Question},
        user::{NewSession, NewUser, Role, User, UserSession},
    },
    routes,
    utils::{crypto::hash_password, token::TokenIssuer},
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<UserSession>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Store double with the same constraints as the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn answer_count(&self) -> usize {
        self.tables.lock().unwrap().answers.len()
    }

    pub fn session_count(&self) -> usize {
        self.tables.lock().unwrap().sessions.len()
    }
}

const QUESTION_MAX_CHARS: usize = 500;
const ANSWER_MAX_CHARS: usize = 8000;

fn require_content(field: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConstraintViolation(format!("{} must not be blank", field)));
    }
    if value.chars().count() > max_chars {
        return Err(Error::ConstraintViolation(format!(
            "value too long for {} ({} characters max)",
            field, max_chars
        )));
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.username == user.username) {
            return Err(Error::username_taken());
        }
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(Error::email_taken());
        }
        let created = User {
            id: t.next_id(),
            uuid: user.uuid,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            country: user.country,
            about_me: user.about_me,
            dob: user.dob,
            role: user.role,
            contact_number: user.contact_number,
        };
        t.users.push(created.clone());
        Ok(created)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_uuid(&self, uuid: &str) -> Result<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.uuid == uuid).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        let mut t = self.tables.lock().unwrap();
        let owned_questions: Vec<i64> = t
            .questions
            .iter()
            .filter(|q| q.user_id == id)
            .map(|q| q.id)
            .collect();
        t.answers
            .retain(|a| a.user_id != id && !owned_questions.contains(&a.question_id));
        t.questions.retain(|q| q.user_id != id);
        t.sessions.retain(|s| s.user_id != id);
        t.users.retain(|u| u.id != id);
        Ok(())
    }

    async fn create_session(&self, session: NewSession) -> Result<UserSession> {
        let mut t = self.tables.lock().unwrap();
        let created = UserSession {
            id: t.next_id(),
            uuid: session.uuid,
            user_id: session.user_id,
            access_token: session.access_token,
            login_at: session.login_at,
            expires_at: session.expires_at,
            logout_at: None,
        };
        t.sessions.push(created.clone());
        Ok(created)
    }

    async fn find_session_by_token(&self, access_token: &str) -> Result<Option<UserSession>> {
        let t = self.tables.lock().unwrap();
        Ok(t.sessions
            .iter()
            .find(|s| s.access_token == access_token)
            .cloned())
    }

    async fn end_session(&self, id: i64, logout_at: DateTime<Utc>) -> Result<UserSession> {
        let mut t = self.tables.lock().unwrap();
        let session = t
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::Internal("session vanished".into()))?;
        session.logout_at = Some(logout_at);
        Ok(session.clone())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question> {
        require_content("content", &question.content, QUESTION_MAX_CHARS)?;
        let mut t = self.tables.lock().unwrap();
        let created = Question {
            id: t.next_id(),
            uuid: question.uuid,
            content: question.content,
            date: question.date,
            user_id: question.user_id,
        };
        t.questions.push(created.clone());
        Ok(created)
    }

    async fn find_question_by_uuid(&self, uuid: &str) -> Result<Option<Question>> {
        let t = self.tables.lock().unwrap();
        Ok(t.questions.iter().find(|q| q.uuid == uuid).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.tables.lock().unwrap().questions.clone())
    }

    async fn list_questions_by_user(&self, user_id: i64) -> Result<Vec<Question>> {
        let t = self.tables.lock().unwrap();
        Ok(t.questions
            .iter()
            .filter(|q| q.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_question(&self, question: Question) -> Result<Question> {
        require_content("content", &question.content, QUESTION_MAX_CHARS)?;
        let mut t = self.tables.lock().unwrap();
        let stored = t
            .questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| Error::Internal("question vanished".into()))?;
        stored.content = question.content;
        Ok(stored.clone())
    }

    async fn delete_question(&self, id: i64) -> Result<()> {
        let mut t = self.tables.lock().unwrap();
        t.answers.retain(|a| a.question_id != id);
        t.questions.retain(|q| q.id != id);
        Ok(())
    }
}

#[async_trait]
impl AnswerStore for MemoryStore {
    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer> {
        require_content("answer", &answer.answer, ANSWER_MAX_CHARS)?;
        let mut t = self.tables.lock().unwrap();
        let created = Answer {
            id: t.next_id(),
            uuid: answer.uuid,
            answer: answer.answer,
            date: answer.date,
            user_id: answer.user_id,
            question_id: answer.question_id,
        };
        t.answers.push(created.clone());
        Ok(created)
    }

    async fn find_answer_by_uuid(&self, uuid: &str) -> Result<Option<Answer>> {
        let t = self.tables.lock().unwrap();
        Ok(t.answers.iter().find(|a| a.uuid == uuid).cloned())
    }

    async fn list_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let t = self.tables.lock().unwrap();
        Ok(t.answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn update_answer(&self, answer: Answer) -> Result<Answer> {
        require_content("answer", &answer.answer, ANSWER_MAX_CHARS)?;
        let mut t = self.tables.lock().unwrap();
        let stored = t
            .answers
            .iter_mut()
            .find(|a| a.id == answer.id)
            .ok_or_else(|| Error::Internal("answer vanished".into()))?;
        stored.answer = answer.answer;
        Ok(stored.clone())
    }

    async fn delete_answer(&self, id: i64) -> Result<()> {
        self.tables.lock().unwrap().answers.retain(|a| a.id != id);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub struct Reply {
    pub status: StatusCode,
    pub access_token: Option<String>,
    pub body: JsonValue,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let state = AppState::with_store(store.clone(), TokenIssuer::new("test_secret_key", 8));
        let router = routes::api_router().with_state(state);
        Self { router, store }
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        authorization: Option<&str>,
        body: Option<JsonValue>,
    ) -> Reply {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = authorization {
            builder = builder.header("authorization", auth);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = self.router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let access_token = resp
            .headers()
            .get("access-token")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        Reply {
            status,
            access_token,
            body,
        }
    }

    /// Registers a non-admin user over HTTP and returns its uuid.
    pub async fn signup(&self, username: &str, password: &str) -> String {
        let reply = self
            .send(
                "POST",
                "/user/signup",
                None,
                Some(json!({
                    "first_name": "Test",
                    "last_name": "User",
                    "user_name": username,
                    "email_address": format!("{}@example.com", username),
                    "password": password,
                    "country": "India",
                })),
            )
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.body);
        reply.body["id"].as_str().unwrap().to_string()
    }

    /// Inserts an admin directly, since signup never grants the role.
    pub async fn seed_admin(&self, username: &str, password: &str) -> String {
        let admin = self
            .store
            .create_user(NewUser {
                uuid: uuid::Uuid::new_v4().to_string(),
                first_name: "Admin".into(),
                last_name: "User".into(),
                username: username.into(),
                email: format!("{}@example.com", username),
                password_hash: hash_password(password).unwrap(),
                country: None,
                about_me: None,
                dob: None,
                role: Role::Admin,
                contact_number: None,
            })
            .await
            .unwrap();
        admin.uuid
    }

    pub async fn signin(&self, username: &str, password: &str) -> String {
        let basic = format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", username, password))
        );
        let reply = self.send("POST", "/user/signin", Some(&basic), None).await;
        assert_eq!(reply.status, StatusCode::OK, "{}", reply.body);
        reply.access_token.expect("access-token header")
    }

    pub async fn create_question(&self, token: &str, content: &str) -> String {
        let reply = self
            .send(
                "POST",
                "/question/create",
                Some(&format!("Bearer {}", token)),
                Some(json!({ "content": content })),
            )
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.body);
        reply.body["id"].as_str().unwrap().to_string()
    }
}
