//! Card data service: CRUD over card records backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use model::CardRecord;
pub use routes::{card_data_routes, common_routes, common_routes_with_ready};
pub use service::CardDataService;
pub use state::AppState;
pub use store::{ensure_card_table, ensure_database_exists, CardStore, PgCardStore};
