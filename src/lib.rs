use std::sync::Arc;

use config::Config;
use database::UserStore;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_util;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Config,
}
