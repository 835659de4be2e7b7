//! In-process backend for client tests.

use std::sync::Arc;

use axum::Router;
use clinic_dash_client::api::ApiClient;
use clinic_dash_client::config::ClientConfig;
use clinic_dash_client::session::Session;
use clinic_dash_client::store::MemoryTokenStore;

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Client pointed at `base_url` with an in-memory token store.
pub fn make_client(base_url: &str) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let session = Session::new(store.clone());
    let client = ApiClient::new(&ClientConfig::with_base_url(base_url), session).unwrap();
    (client, store)
}
