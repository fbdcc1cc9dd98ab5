//! HTTP route handlers for the document translator web application.
//!
//! `POST /translate` speaks JSON; `/` is a server-rendered upload page.

mod pages;
mod translate;


pub use pages::index;
pub use translate::translate_document;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Upload size limit for the whole multipart body
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate_document))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
