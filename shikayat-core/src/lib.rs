// src/lib.rs

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod utils;

pub use db::Database;
pub use error::Error;
