//! Core Module
//!
//! Configuration, shared server state and the HTTP server itself.

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;

use crate::utils::logger::init_logger;

/// Set up the process environment: .env file, then logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}
