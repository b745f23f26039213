use std::{future::Future, sync::Arc};

use axum::Router;
use todo_core::{InMemoryTodoStore, TodoStore};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controller;
pub mod error;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use todo_core::{Todo, TodoId, TodoPayload};

/// The store shared by all request handlers.
pub type SharedStore = Arc<RwLock<Box<dyn TodoStore>>>;

/// Router backed by a fresh, empty in-memory store.
pub fn app() -> Router {
    app_with_store(InMemoryTodoStore::new())
}

/// Router backed by `store`, which it takes ownership of.
pub fn app_with_store(store: impl TodoStore) -> Router {
    let store: Box<dyn TodoStore> = Box::new(store);
    let store: SharedStore = Arc::new(RwLock::new(store));
    controller::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve a fresh in-memory store on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_until(listener, InMemoryTodoStore::new(), std::future::pending()).await
}

/// Serve `store` on `listener` until `shutdown` resolves.
pub async fn run_until<F>(
    listener: TcpListener,
    store: impl TodoStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}
