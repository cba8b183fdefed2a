use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        question_dto::{QuestionDetailsResponse, QuestionRequest},
        StatusResponse,
    },
    error::Result,
    middleware::auth::AuthorizationHeader,
    AppState,
};

#[utoipa::path(
    post,
    path = "/question/create",
    request_body = QuestionRequest,
    params(
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 201, description = "Question created", body = StatusResponse),
        (status = 403, description = "Not signed in"),
        (status = 422, description = "Blank content")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    Json(payload): Json<QuestionRequest>,
) -> Result<impl IntoResponse> {
    let question = state
        .question_service
        .create_question(payload.content, &authorization)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(question.uuid, "QUESTION CREATED")),
    ))
}

#[utoipa::path(
    get,
    path = "/question/all",
    params(
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 200, description = "All questions", body = [QuestionDetailsResponse]),
        (status = 403, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn list_all_questions(
    State(state): State<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let questions = state
        .question_service
        .list_all_questions(&authorization)
        .await?;
    let items: Vec<QuestionDetailsResponse> = questions.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/question/all/{user_id}",
    params(
        ("user_id" = String, Path, description = "Owner uuid"),
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 200, description = "Questions posted by the user", body = [QuestionDetailsResponse]),
        (status = 403, description = "Not signed in"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn list_questions_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let questions = state
        .question_service
        .list_questions_by_user(&user_id, &authorization)
        .await?;
    let items: Vec<QuestionDetailsResponse> = questions.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/question/edit/{question_id}",
    request_body = QuestionRequest,
    params(
        ("question_id" = String, Path, description = "Question uuid"),
        ("authorization" = String, Header, description = "Access token of the owner")
    ),
    responses(
        (status = 200, description = "Question edited", body = StatusResponse),
        (status = 403, description = "Not signed in or not the owner"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn edit_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
    Json(payload): Json<QuestionRequest>,
) -> Result<impl IntoResponse> {
    let question = state
        .question_service
        .edit_question(payload.content, &question_id, &authorization)
        .await?;
    Ok(Json(StatusResponse::new(question.uuid, "QUESTION EDITED")))
}

#[utoipa::path(
    delete,
    path = "/question/delete/{question_id}",
    params(
        ("question_id" = String, Path, description = "Question uuid"),
        ("authorization" = String, Header, description = "Access token of the owner or an admin")
    ),
    responses(
        (status = 200, description = "Question deleted", body = StatusResponse),
        (status = 403, description = "Not signed in, not the owner and not an admin"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let uuid = state
        .question_service
        .delete_question(&question_id, &authorization)
        .await?;
    Ok(Json(StatusResponse::new(uuid, "QUESTION DELETED")))
}
