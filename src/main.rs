use std::{env, sync::Arc};

use memo_server::{router, service::NoteService, store::NoteStore};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let database_dsn =
        env::var("PG_DSN").expect("database dsn must be provided as an ENV variable");
    let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    // Store creation and migration
    let mut store = NoteStore::connect(&database_dsn).await.unwrap_or_else(|e| {
        tracing::error!("Failed to establish database connection: {e}");
        panic!("failed to establish database connection: {e}");
    });

    store.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(NoteService::new(store));

    // Router config
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {listen_addr}: {e}");
            panic!("failed to bind to {listen_addr}: {e}");
        });
    let addr = listener.local_addr().unwrap();

    tracing::info!("Memo server starting, listening on {}", addr);
    tracing::info!("Server is ready to accept connections");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
