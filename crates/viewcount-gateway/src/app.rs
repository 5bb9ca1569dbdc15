use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, views_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// `/api/views` accepts every method so that unsupported ones still get
    /// the JSON 405 body from the handler.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/views", any(views_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
