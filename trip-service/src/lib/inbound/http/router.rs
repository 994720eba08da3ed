use std::sync::Arc;
use std::time::Duration;

use auth::gate;
use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post;
use super::handlers::create_trip;
use super::handlers::delete_trip;
use super::handlers::get_trip;
use super::handlers::get_trip_posts;
use super::handlers::list_trips;
use crate::domain::post::ports::PostServicePort;
use crate::domain::trip::ports::TripServicePort;

/// Unified application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub trip_service: Arc<dyn TripServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    trip_service: Arc<dyn TripServicePort>,
    post_service: Arc<dyn PostServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        trip_service,
        post_service,
        authenticator,
    };

    // Every data route sits behind the gate: no handler here runs for an
    // anonymous caller.
    let api_routes = Router::new()
        .route("/api/trips", post(create_trip))
        .route("/api/trips", get(list_trips))
        .route("/api/trips/:trip_id", get(get_trip))
        .route("/api/trips/:trip_id/posts", post(create_post))
        .route("/api/trips/:trip_id/posts", get(get_trip_posts))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            gate::require_auth,
        ));

    let admin_routes = Router::new()
        .route("/api/admin/trips/:trip_id", delete(delete_trip))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            gate::require_admin,
        ));

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
        .merge(api_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
