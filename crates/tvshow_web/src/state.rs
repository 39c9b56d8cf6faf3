use db::MySqlPool;

/// Shared app state for Axum handlers. The pool is always present: startup
/// fails fast when the database cannot be pinged, so handlers never see a
/// missing backend.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
}
