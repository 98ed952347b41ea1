pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod web;

pub use router::{build_router, cors_layer};
