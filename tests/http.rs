//! Full form-flow tests through the router, driven in-process with
//! `tower::ServiceExt::oneshot`. Like the store tests these need a live
//! PostgreSQL instance and skip with a message when `PG_DSN` is unset.

use std::{env, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use tower::util::ServiceExt;

use memo_server::{router, service::NoteService, store::NoteStore};

async fn test_router() -> Option<Router> {
    let Ok(dsn) = env::var("PG_DSN") else {
        eprintln!("PG_DSN not set, skipping http test");
        return None;
    };

    let mut store = NoteStore::connect(&dsn)
        .await
        .expect("failed to establish database connection");
    store.migrate().await.expect("failed to migrate database");

    Some(router(Arc::new(NoteService::new(store))))
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("request failed")
}

async fn post_form(app: &Router, uri: &str, form: String) -> Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .expect("request"),
        )
        .await
        .expect("request failed")
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

fn assert_redirects_to_list(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header");
    assert_eq!(location, "/list");
}

/// Pulls the note id out of the list page row holding `title`.
fn extract_note_id(page: &str, title: &str) -> i64 {
    let row = page
        .split("<li>")
        .find(|segment| segment.contains(title))
        .expect("note row missing from list page");
    let id: String = row
        .split("/view/")
        .nth(1)
        .expect("view link missing from row")
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    id.parse().expect("unparseable note id")
}

#[tokio::test]
async fn root_redirects_to_list() {
    let Some(app) = test_router().await else {
        return;
    };

    let response = get(&app, "/").await;
    assert_redirects_to_list(&response);
}

#[tokio::test]
async fn add_form_renders() {
    let Some(app) = test_router().await else {
        return;
    };

    let response = get(&app, "/add").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("action=\"/add\""));
    assert!(page.contains("name=\"title\""));
    assert!(page.contains("name=\"body\""));
}

#[tokio::test]
async fn missing_note_renders_not_found_page() {
    let Some(app) = test_router().await else {
        return;
    };

    // BIGSERIAL starts at 1, so id 0 never exists
    for uri in ["/view/0", "/edit?id=0", "/delete?id=0"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");

        let page = body_string(response).await;
        assert!(page.contains("Note with id 0 not found"));
    }
}

#[tokio::test]
async fn form_flow_creates_edits_and_deletes_a_note() {
    let Some(app) = test_router().await else {
        return;
    };

    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .expect("timestamp out of range");
    let title = format!("Groceries-{nanos}");

    // Create through the form and follow the redirect to the list
    let response = post_form(
        &app,
        "/add",
        format!("title={title}&body=Milk+and+eggs"),
    )
    .await;
    assert_redirects_to_list(&response);

    let response = get(&app, "/list").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains(&title));

    let id = extract_note_id(&page, &title);

    // Detail page shows the body
    let response = get(&app, &format!("/view/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Milk and eggs"));

    // Edit form comes back populated
    let response = get(&app, &format!("/edit?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains(&format!("name=\"id\" value=\"{id}\"")));
    assert!(page.contains(&title));

    // Rewrite it through the edit form
    let updated_title = format!("Todo-{nanos}");
    let response = post_form(
        &app,
        "/edit",
        format!("id={id}&title={updated_title}&body=Write+spec"),
    )
    .await;
    assert_redirects_to_list(&response);

    let response = get(&app, &format!("/view/{id}")).await;
    let page = body_string(response).await;
    assert!(page.contains(&updated_title));
    assert!(page.contains("Write spec"));
    assert!(!page.contains("Milk and eggs"));

    // Delete it and verify it is gone
    let response = get(&app, &format!("/delete?id={id}")).await;
    assert_redirects_to_list(&response);

    let response = get(&app, "/list").await;
    let page = body_string(response).await;
    assert!(!page.contains(&updated_title));

    let response = get(&app, &format!("/view/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
