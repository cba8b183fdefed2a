use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Raw `authorization` header value.
///
/// A missing or non-UTF-8 header yields an empty string, which the services
/// reject the same way as an unknown token.
#[derive(Debug, Clone)]
pub struct AuthorizationHeader(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok(AuthorizationHeader(value))
    }
}
