use axum::Router;

use crate::state::AppState;

pub mod shows;

/// Build the application router (listing + detail pages).
pub fn router(state: AppState) -> Router {
    Router::new().merge(shows::router()).with_state(state)
}
