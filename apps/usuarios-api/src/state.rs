//! Shared application state.

/// Cloned into handlers; the connection pool is reference counted
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
