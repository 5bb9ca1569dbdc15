//! HTTP gateway for the viewcount service.
//!
//! Serves the view counter at `/api/views` and a liveness probe at
//! `/health`. The counter store is injected through [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod state;

pub use app::App;
pub use state::AppState;
