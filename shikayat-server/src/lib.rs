// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
