use std::sync::Arc;

use linklet_service::Linker;

#[derive(Clone)]
pub struct AppState {
    links: Arc<dyn Linker>,
}

impl AppState {
    pub fn new(links: Arc<dyn Linker>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &dyn Linker {
        self.links.as_ref()
    }
}
