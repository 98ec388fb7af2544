pub mod config;
pub mod errors;
pub mod extract;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
