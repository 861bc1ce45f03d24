pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod templates;

use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::{handlers::pages, service::NoteService};

/// Builds the page router over a shared [`NoteService`].
pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/list", get(pages::list_notes))
        .route("/add", get(pages::add_note_form))
        .route("/add", post(pages::add_note))
        .route("/edit", get(pages::edit_note_form))
        .route("/edit", post(pages::edit_note))
        .route("/delete", get(pages::delete_note))
        .route("/view/{id}", get(pages::view_note))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}
