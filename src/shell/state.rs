use std::sync::Arc;

use crate::modules::camps::adapters::outbound::in_memory_store::InMemoryCampStore;
use crate::modules::camps::use_cases::manage_camps::handler::CampsHandler;
use crate::modules::camps::use_cases::manage_talks::handler::TalksHandler;
use crate::shared::infrastructure::links::LinkGenerator;

#[derive(Clone)]
pub struct AppState {
    pub camps: Arc<CampsHandler<InMemoryCampStore>>,
    pub talks: Arc<TalksHandler<InMemoryCampStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryCampStore>, links: LinkGenerator) -> Self {
        Self {
            camps: Arc::new(CampsHandler::new(store.clone(), links.clone())),
            talks: Arc::new(TalksHandler::new(store, links)),
        }
    }
}
