pub mod config;
pub mod cors;
pub mod handlers;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::cors::cors;
use crate::handlers::{auth_info, echo, healthz};

/// ルーティング定義
pub fn app() -> Router {
    Router::new()
        .route("/echo", post(echo).layer(DefaultBodyLimit::disable()))
        .route("/healthz", get(healthz))
        .route("/auth/info/googlejwt", get(auth_info))
        .route("/auth/info/googleidtoken", get(auth_info))
        .route(
            "/auth/info/firebase",
            get(auth_info)
                .options(auth_info)
                .route_layer(middleware::from_fn(cors)),
        )
        .route("/auth/info/auth0", get(auth_info))
        .route_layer(middleware::from_fn(reject_head))
}

/// GETルートが暗黙に受け付けるHEADを405にする
async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    next.run(request).await
}
