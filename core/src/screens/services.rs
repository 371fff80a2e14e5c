//! Services list screen.

use crate::api::Api;
use crate::transport::CancelToken;
use crate::types::Service;

pub struct ServicesScreen {
    pub services: Vec<Service>,
    pub loading: bool,
    pub refreshing: bool,
    cancel: CancelToken,
}

impl ServicesScreen {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            loading: true,
            refreshing: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());
        match api.list_services() {
            Ok(services) => self.services = services,
            Err(err) => tracing::warn!(error = %err, "failed to load services"),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn refresh(&mut self, api: &Api) {
        self.refreshing = true;
        self.load(api);
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for ServicesScreen {
    fn default() -> Self {
        Self::new()
    }
}
