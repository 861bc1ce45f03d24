use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{EditForm, IdParams, NoteForm},
    service::NoteService,
    store::StoreError,
    templates,
};

#[debug_handler]
pub async fn home() -> Redirect {
    Redirect::to("/list")
}

#[debug_handler]
pub async fn list_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.list_notes().await {
        Ok(notes) => Html(templates::list_page(&notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to list note entries: {}", e);
            internal_error("Failed to list notes")
        }
    }
}

#[debug_handler]
pub async fn add_note_form() -> Html<String> {
    Html(templates::add_page())
}

#[debug_handler]
pub async fn add_note(
    State(service): State<Arc<NoteService>>,
    Form(payload): Form<NoteForm>,
) -> Response {
    match service.create_note(payload).await {
        Ok(_) => Redirect::to("/list").into_response(),
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            internal_error("Failed to create note")
        }
    }
}

#[debug_handler]
pub async fn edit_note_form(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<IdParams>,
) -> Response {
    match service.get_note(params.id).await {
        Ok(note) => Html(templates::edit_page(&note)).into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
        Err(e) => {
            tracing::error!("failed to get note entry: {}", e);
            internal_error("Failed to get note")
        }
    }
}

#[debug_handler]
pub async fn edit_note(
    State(service): State<Arc<NoteService>>,
    Form(payload): Form<EditForm>,
) -> Response {
    match service.update_note(payload).await {
        Ok(_) => Redirect::to("/list").into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
        Err(e) => {
            tracing::error!("failed to update note entry: {}", e);
            internal_error("Failed to update note")
        }
    }
}

#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<IdParams>,
) -> Response {
    match service.delete_note(params.id).await {
        Ok(()) => Redirect::to("/list").into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
        Err(e) => {
            tracing::error!("failed to delete note entry: {}", e);
            internal_error("Failed to delete note")
        }
    }
}

#[debug_handler]
pub async fn view_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => Html(templates::view_page(&note)).into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
        Err(e) => {
            tracing::error!("failed to get note entry: {}", e);
            internal_error("Failed to get note")
        }
    }
}

fn not_found(id: i64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(templates::error_page(
            "404 Not Found",
            &format!("Note with id {id} not found"),
        )),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::error_page("500 Internal Server Error", message)),
    )
        .into_response()
}
