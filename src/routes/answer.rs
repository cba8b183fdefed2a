use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        answer_dto::{AnswerDetailsResponse, AnswerEditRequest, AnswerRequest},
        StatusResponse,
    },
    error::Result,
    middleware::auth::AuthorizationHeader,
    AppState,
};

#[utoipa::path(
    post,
    path = "/question/{question_id}/answer/create",
    request_body = AnswerRequest,
    params(
        ("question_id" = String, Path, description = "Question uuid"),
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 201, description = "Answer created", body = StatusResponse),
        (status = 403, description = "Not signed in"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn create_answer(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse> {
    let answer = state
        .answer_service
        .create_answer(payload.answer, &question_id, &authorization)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(answer.uuid, "ANSWER CREATED")),
    ))
}

#[utoipa::path(
    put,
    path = "/answer/edit/{answer_id}",
    request_body = AnswerEditRequest,
    params(
        ("answer_id" = String, Path, description = "Answer uuid"),
        ("authorization" = String, Header, description = "Access token of the owner")
    ),
    responses(
        (status = 200, description = "Answer edited", body = StatusResponse),
        (status = 403, description = "Not signed in or not the owner"),
        (status = 404, description = "Answer not found")
    )
)]
#[axum::debug_handler]
pub async fn edit_answer(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    Json(payload): Json<AnswerEditRequest>,
) -> Result<impl IntoResponse> {
    let answer = state
        .answer_service
        .edit_answer(payload.content, &answer_id, &authorization)
        .await?;
    Ok(Json(StatusResponse::new(answer.uuid, "ANSWER EDITED")))
}

#[utoipa::path(
    delete,
    path = "/answer/delete/{answer_id}",
    params(
        ("answer_id" = String, Path, description = "Answer uuid"),
        ("authorization" = String, Header, description = "Access token of the owner or an admin")
    ),
    responses(
        (status = 200, description = "Answer deleted", body = StatusResponse),
        (status = 403, description = "Not signed in, not the owner and not an admin"),
        (status = 404, description = "Answer not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_answer(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let uuid = state
        .answer_service
        .delete_answer(&answer_id, &authorization)
        .await?;
    Ok(Json(StatusResponse::new(uuid, "ANSWER DELETED")))
}

#[utoipa::path(
    get,
    path = "/answer/all/{question_id}",
    params(
        ("question_id" = String, Path, description = "Question uuid"),
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 200, description = "Answers to the question", body = [AnswerDetailsResponse]),
        (status = 403, description = "Not signed in"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn list_answers_to_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let (question, answers) = state
        .answer_service
        .list_answers_to_question(&question_id, &authorization)
        .await?;
    Ok(Json(AnswerDetailsResponse::list(&question, answers)))
}
