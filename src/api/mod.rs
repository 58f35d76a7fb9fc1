//! HTTP surface: routing, handlers and the mapping from domain errors to status codes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::app;
pub use server::serve;
pub use state::AppState;
