use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::Utc;

use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "Bearer";

/// Verifies the bearer token and attaches the `AuthenticatedPrincipal` to
/// request extensions.
///
/// Every rejection is a 401 with an empty body; the reason is only logged.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| StatusCode::UNAUTHORIZED.into_response())?;

    let principal = state.token_codec.verify(token, Utc::now()).map_err(|e| {
        tracing::warn!(
            reason = %e,
            method = %req.method(),
            uri = %req.uri(),
            "Token verification failed"
        );
        StatusCode::UNAUTHORIZED.into_response()
    })?;

    tracing::debug!(username = %principal.username, "Request authorized");
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
        tracing::debug!(uri = %req.uri(), "Missing Authorization header");
        return None;
    };

    // Scheme names are case-insensitive
    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    if token.is_none() {
        tracing::warn!(uri = %req.uri(), "Malformed Authorization header");
    }

    token
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use chrono::Duration;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::post::service::PostService;
    use crate::domain::user::models::Authority;
    use crate::domain::user::models::Username;
    use crate::domain::user::ports::TokenCodec;
    use crate::domain::user::service::AuthenticationService;
    use crate::inbound::http::router::create_router;
    use crate::outbound::repositories::InMemoryPostRepository;
    use crate::outbound::repositories::InMemoryUserRepository;
    use crate::outbound::security::Argon2PasswordHasher;
    use crate::outbound::security::JwtTokenCodec;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn app() -> (axum::Router, Arc<JwtTokenCodec>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let codec = Arc::new(JwtTokenCodec::new(SECRET, Duration::hours(1)));
        let auth_service = Arc::new(AuthenticationService::new(
            users,
            Arc::new(Argon2PasswordHasher::new()),
            Arc::clone(&codec),
        ));
        let post_service = Arc::new(PostService::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::clone(&auth_service),
        ));

        (
            create_router(auth_service, post_service, codec.clone()),
            codec,
        )
    }

    async fn status_and_body(router: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn posts_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/posts");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_rejections_have_empty_body() {
        let (router, codec) = app();
        let token = codec
            .issue(
                &Username::new("alice".to_string()).unwrap(),
                &[Authority::user()],
                Utc::now(),
            )
            .unwrap();

        for authorization in [
            None,
            Some("Bearer"),
            Some("Bearer "),
            Some("bearer-less"),
            Some("Bearer not.a.token"),
        ] {
            let (status, body) = status_and_body(router.clone(), posts_request(authorization)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{:?}", authorization);
            assert!(body.is_empty());
        }

        let basic = format!("Basic {}", token);
        let (status, body) = status_and_body(router, posts_request(Some(&basic))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let (router, codec) = app();
        let token = codec
            .issue(
                &Username::new("alice".to_string()).unwrap(),
                &[Authority::user()],
                Utc::now(),
            )
            .unwrap();

        // Token is valid but the user was never stored
        let bearer = format!("Bearer {}", token);
        let (status, _) = status_and_body(router, posts_request(Some(&bearer))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_scheme_is_case_insensitive() {
        let (router, codec) = app();
        let token = codec
            .issue(
                &Username::new("alice".to_string()).unwrap(),
                &[Authority::user()],
                Utc::now(),
            )
            .unwrap();

        for scheme in ["bearer", "BEARER", "Bearer"] {
            let authorization = format!("{} {}", scheme, token);
            let (status, _) =
                status_and_body(router.clone(), posts_request(Some(&authorization))).await;
            // Past the filter; the user was never stored
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", scheme);
        }
    }

    #[tokio::test]
    async fn test_public_routes_skip_authorization() {
        let (router, _) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice","password":"secret"}"#))
            .unwrap();

        let (status, body) = status_and_body(router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.is_empty());
    }
}
