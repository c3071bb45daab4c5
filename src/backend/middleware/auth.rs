/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 *
 * Whether the user still exists and is verified is checked by the
 * operations themselves, not here.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::ChatError;
use crate::shared::UserId;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token
/// 3. Extracts user ID from token claims
/// 4. Attaches user data to request extensions for use in handlers
///
/// Returns 401 Unauthorized if token is missing or invalid
pub async fn auth_middleware(
    State(sessions): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ChatError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ChatError::unauthenticated()
        })?;

    // format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ChatError::unauthenticated()
    })?;

    let claims = sessions.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ChatError::unauthenticated()
    })?;

    let user_id = claims.sub.parse::<UserId>().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ChatError::unauthenticated()
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user's ID
///
/// Only usable on routes wrapped by `auth_middleware`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ChatError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<AuthenticatedUser>().ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            ChatError::unauthenticated()
        })?;

        Ok(AuthUser(user.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
    use chrono::Duration;
    use tower::ServiceExt;

    fn keys() -> SessionKeys {
        SessionKeys::new("middleware-secret", Duration::days(30))
    }

    fn app() -> Router {
        Router::new()
            .route("/whoami", get(|AuthUser(id): AuthUser| async move { id.to_string() }))
            .route_layer(from_fn_with_state(keys(), auth_middleware))
    }

    async fn call(authorization: Option<String>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = keys().create_token(17, "a@b.c").unwrap();
        let (status, body) = call(Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "17");
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("\"success\":false"));
    }

    #[tokio::test]
    async fn test_wrong_scheme_rejected() {
        let token = keys().create_token(17, "a@b.c").unwrap();
        let (status, _) = call(Some(format!("Token {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_foreign_token_rejected() {
        let token = SessionKeys::new("other", Duration::days(1)).create_token(17, "a@b.c").unwrap();
        let (status, _) = call(Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_rejects() {
        let app = Router::new().route("/whoami", get(|AuthUser(id): AuthUser| async move { id.to_string() }));
        let response = app
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
