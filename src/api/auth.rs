use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Bearer-token middleware guarding the `/api` routes.
///
/// With `API_TOKEN` set, every request must carry a matching
/// `Authorization: Bearer <token>`. Unset (or empty) leaves the API open,
/// which is how the local demo runs. Rejections use the standard
/// `{ success: false, error }` envelope.
pub async fn require_auth(req: Request, next: Next) -> Response {
    let expected = std::env::var("API_TOKEN").unwrap_or_default();

    if expected.is_empty() || bearer_token(&req).is_some_and(|token| token == expected) {
        return next.run(req).await;
    }

    AppError::Unauthorized.into_response()
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
