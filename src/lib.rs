pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::database::{
    postgres::PgStore,
    store::{AnswerStore, QuestionStore, UserStore},
};
use crate::services::{
    answer_service::AnswerService, auth_service::AuthService, question_service::QuestionService,
    user_service::UserService,
};
use crate::utils::token::TokenIssuer;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub question_service: QuestionService,
    pub answer_service: AnswerService,
}

impl AppState {
    pub fn new(pool: PgPool, tokens: TokenIssuer) -> Self {
        Self::with_store(Arc::new(PgStore::new(pool)), tokens)
    }

    /// Wires every service to one store implementing all three gateways.
    pub fn with_store<S>(store: Arc<S>, tokens: TokenIssuer) -> Self
    where
        S: UserStore + QuestionStore + AnswerStore + 'static,
    {
        let users: Arc<dyn UserStore> = store.clone();
        let questions: Arc<dyn QuestionStore> = store.clone();
        let answers: Arc<dyn AnswerStore> = store;

        let auth_service = AuthService::new(users.clone(), tokens);
        let user_service = UserService::new(users.clone(), auth_service.clone());
        let question_service =
            QuestionService::new(auth_service.clone(), users, questions.clone());
        let answer_service = AnswerService::new(auth_service.clone(), questions, answers);

        Self {
            auth_service,
            user_service,
            question_service,
            answer_service,
        }
    }
}
