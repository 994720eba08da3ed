use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::authenticator::Authenticator;
use crate::authorizer::authorize;
use crate::error::AuthError;
use crate::identity::Role;

/// Middleware gating a route group on a verified credential.
///
/// Applied with `axum::middleware::from_fn_with_state` over the shared
/// [`Authenticator`]. On success the verified [`crate::Identity`] is
/// inserted into request extensions for handlers to read; on failure the
/// request short-circuits with the classified error before any handler or
/// store access runs.
pub async fn require_auth(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticator.authenticate(req.headers())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Middleware gating a route group on the admin role.
///
/// Authentication always runs before authorization, so a bad credential
/// reports `Unauthorized` and only a valid credential with the wrong role
/// reports `Forbidden`.
pub async fn require_admin(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticator.authenticate(req.headers())?;

    authorize(&identity, Role::Admin)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
