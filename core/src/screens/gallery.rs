//! Gallery screen: list plus delete.

use crate::api::Api;
use crate::error::ApiError;
use crate::transport::CancelToken;
use crate::types::GalleryItem;

pub struct GalleryScreen {
    pub items: Vec<GalleryItem>,
    pub loading: bool,
    pub refreshing: bool,
    cancel: CancelToken,
}

impl GalleryScreen {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            refreshing: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());
        match api.list_gallery() {
            Ok(items) => self.items = items,
            Err(err) => tracing::warn!(error = %err, "failed to load gallery"),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn refresh(&mut self, api: &Api) {
        self.refreshing = true;
        self.load(api);
    }

    /// Delete on the backend, then drop the item from local state. Failures
    /// propagate so the caller can show a dialog.
    pub fn remove(&mut self, api: &Api, id: &str) -> Result<(), ApiError> {
        let api = api.scoped(self.cancel.clone());
        api.delete_gallery_item(id)?;
        self.items.retain(|item| item.id != id);
        Ok(())
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for GalleryScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::transport::testing::FakeTransport;

    const LIST_BODY: &str = r#"[
        {"id": "g1", "image": "data:image/png;base64,AA==", "caption": "bridal look", "createdAt": "2024-01-02T00:00:00Z"},
        {"id": "g2", "image": "data:image/png;base64,AA==", "createdAt": "2024-01-01T00:00:00Z"}
    ]"#;

    #[test]
    fn remove_drops_the_item_locally_on_success() {
        let transport = FakeTransport::new()
            .route("/api/gallery", 200, LIST_BODY)
            .route("/api/gallery/g1", 200, r#"{"message": "Gallery item deleted successfully"}"#);
        let api = Api::with_transport("http://test", Arc::new(transport));

        let mut screen = GalleryScreen::new();
        screen.load(&api);
        assert_eq!(screen.items.len(), 2);

        screen.remove(&api, "g1").unwrap();
        assert_eq!(screen.items.len(), 1);
        assert_eq!(screen.items[0].id, "g2");
    }

    #[test]
    fn remove_keeps_the_item_when_the_backend_refuses() {
        let transport = FakeTransport::new()
            .route("/api/gallery", 200, LIST_BODY)
            .route("/api/gallery/g1", 404, r#"{"detail":"Gallery item not found"}"#);
        let api = Api::with_transport("http://test", Arc::new(transport));

        let mut screen = GalleryScreen::new();
        screen.load(&api);
        let err = screen.remove(&api, "g1").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(screen.items.len(), 2);
    }
}
