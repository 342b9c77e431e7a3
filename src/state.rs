//! Shared application state for the card-data routes.

use crate::service::CardDataService;

#[derive(Clone)]
pub struct AppState {
    pub service: CardDataService,
}
