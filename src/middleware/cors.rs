use axum::http::HeaderName;
use tower_http::cors::{Any, CorsLayer};

pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// Open CORS policy that lets browsers read the signin token header.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
        .expose_headers([HeaderName::from_static(ACCESS_TOKEN_HEADER)])
}
