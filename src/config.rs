//! Process configuration, resolved once at startup from the environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    /// Schema qualifier for the card_data table. Immutable after startup.
    pub schema: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/carddata".into()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            schema: env::var("CARD_DATA_SCHEMA").unwrap_or_else(|_| "dbo".into()),
        }
    }
}
