//! Repository layer for the emergency and place catalogs.
//!
//! All database access uses Diesel over SQLite. Connections are wrapped in
//! diesel-async's `SyncConnectionWrapper` so callers stay async.

mod emergency;
mod models;
mod place;
mod pool;
mod provision;
pub mod seed;

use thiserror::Error;

pub use emergency::EmergencyRepository;
pub use models::{EmergencyRecord, NewEmergency, NewPlace, PlaceRecordRow};
pub use place::PlaceRepository;
pub use pool::{AsyncSqliteConnection, AsyncSqlitePool, DieselError};
pub use provision::Provisioner;

/// Errors raised by the catalog stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Database error: {0}")]
    Query(#[from] DieselError),

    #[error("Unknown place category in database: {0}")]
    InvalidCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
