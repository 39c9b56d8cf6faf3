//! Server-rendered front end for the show catalogue: a homepage listing the
//! top 30 shows by name and a detail page per show.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use config::Config;
pub use state::AppState;
