mod error;
mod extractor;
mod handlers;
mod routes;
mod server;
mod state;

pub use error::ApiError;
pub use server::{build_router, serve, LISTEN_PORT};
pub use state::AppState;
