use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::registry::RedirectRegistry;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(registry: Arc<RedirectRegistry>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(registry)),
        }
    }
}
