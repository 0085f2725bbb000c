//! Route table
//!
//! Two addressable workflows: `/` for creation, `/card/{id}` for viewing.
//! The identifier is passed through opaquely; the store decides whether it
//! exists.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::context::AppContext;
use crate::handlers;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::create_card))
        .route("/card/{id}", get(handlers::view_card))
        .route("/card/{id}/qr.png", get(handlers::download_qr))
        .fallback(handlers::not_found)
        .with_state(ctx)
}
