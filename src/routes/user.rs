use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        user_dto::{SessionResponse, SignupUserRequest, UserDetailsResponse},
        StatusResponse,
    },
    error::{Error, Result},
    middleware::{auth::AuthorizationHeader, cors::ACCESS_TOKEN_HEADER},
    AppState,
};

#[utoipa::path(
    post,
    path = "/user/signup",
    request_body = SignupUserRequest,
    responses(
        (status = 201, description = "User registered", body = StatusResponse),
        (status = 409, description = "Username or email already taken"),
        (status = 422, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupUserRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.signup(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new(user.uuid, "USER SUCCESSFULLY REGISTERED")),
    ))
}

#[utoipa::path(
    post,
    path = "/user/signin",
    params(
        ("authorization" = String, Header, description = "Basic base64(username:password)")
    ),
    responses(
        (status = 200, description = "Signed in; token in the access-token header", body = SessionResponse),
        (status = 401, description = "Unknown username or wrong password")
    )
)]
#[axum::debug_handler]
pub async fn signin(
    State(state): State<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let (user, session) = state.auth_service.signin(&authorization).await?;

    let mut headers = HeaderMap::new();
    let token = HeaderValue::from_str(&session.access_token)
        .map_err(|e| Error::Internal(format!("access token is not a valid header: {}", e)))?;
    headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);

    Ok((
        StatusCode::OK,
        headers,
        Json(SessionResponse {
            id: user.uuid,
            message: "SIGNED IN SUCCESSFULLY".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/user/signout",
    params(
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 200, description = "Signed out", body = SessionResponse),
        (status = 401, description = "Token has no session")
    )
)]
#[axum::debug_handler]
pub async fn signout(
    State(state): State<AppState>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.signout(&authorization).await?;
    Ok(Json(SessionResponse {
        id: user.uuid,
        message: "SIGNED OUT SUCCESSFULLY".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/userprofile/{user_id}",
    params(
        ("user_id" = String, Path, description = "User uuid"),
        ("authorization" = String, Header, description = "Access token")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetailsResponse),
        (status = 403, description = "Not signed in"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .user_profile(&user_id, &authorization)
        .await?;
    Ok(Json(UserDetailsResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/admin/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "User uuid"),
        ("authorization" = String, Header, description = "Access token of an admin")
    ),
    responses(
        (status = 200, description = "User deleted", body = StatusResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AuthorizationHeader(authorization): AuthorizationHeader,
) -> Result<impl IntoResponse> {
    let uuid = state
        .user_service
        .delete_user(&user_id, &authorization)
        .await?;
    Ok(Json(StatusResponse::new(uuid, "USER SUCCESSFULLY DELETED")))
}
