use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{dto, AppState};

pub mod answer;
pub mod health;
pub mod question;
pub mod user;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        user::signup,
        user::signin,
        user::signout,
        user::user_profile,
        user::delete_user,
        question::create_question,
        question::list_all_questions,
        question::list_questions_by_user,
        question::edit_question,
        question::delete_question,
        answer::create_answer,
        answer::edit_answer,
        answer::delete_answer,
        answer::list_answers_to_question,
    ),
    components(schemas(
        dto::StatusResponse,
        dto::user_dto::SignupUserRequest,
        dto::user_dto::SessionResponse,
        dto::user_dto::UserDetailsResponse,
        dto::question_dto::QuestionRequest,
        dto::question_dto::QuestionDetailsResponse,
        dto::answer_dto::AnswerRequest,
        dto::answer_dto::AnswerEditRequest,
        dto::answer_dto::AnswerDetailsResponse,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/user/signup", post(user::signup))
        .route("/user/signin", post(user::signin))
        .route("/user/signout", post(user::signout))
        .route("/userprofile/:user_id", get(user::user_profile))
        .route("/admin/user/:user_id", delete(user::delete_user))
        .route("/question/create", post(question::create_question))
        .route("/question/all", get(question::list_all_questions))
        .route("/question/all/:user_id", get(question::list_questions_by_user))
        .route("/question/edit/:question_id", put(question::edit_question))
        .route("/question/delete/:question_id", delete(question::delete_question))
        .route(
            "/question/:question_id/answer/create",
            post(answer::create_answer),
        )
        .route("/answer/edit/:answer_id", put(answer::edit_answer))
        .route("/answer/delete/:answer_id", delete(answer::delete_answer))
        .route("/answer/all/:question_id", get(answer::list_answers_to_question))
}
