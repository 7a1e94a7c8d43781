use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::delete_user::delete_user;
use super::handlers::get_post::get_post;
use super::handlers::get_user::get_user;
use super::handlers::list_posts::list_posts;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::middleware::authorize;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::AuthenticationServicePort;
use crate::domain::user::ports::TokenCodec;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthenticationServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub token_codec: Arc<dyn TokenCodec>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthenticationServicePort>,
    post_service: Arc<dyn PostServicePort>,
    token_codec: Arc<dyn TokenCodec>,
) -> Router {
    let state = AppState {
        auth_service,
        post_service,
        token_codec,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/", get(list_posts))
        .route("/posts/:post_id", get(get_post))
        .route("/users/:user_id", get(get_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
