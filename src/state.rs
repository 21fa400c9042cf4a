use std::sync::Arc;

use crate::{config::Config, orders::OrderStore};

pub struct AppState {
    pub config: Config,
    pub orders: OrderStore,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        Arc::new(Self {
            config,
            orders: OrderStore::new(),
        })
    }
}
