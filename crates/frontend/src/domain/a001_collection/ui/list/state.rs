use contracts::domain::a001_collection::Collection;
use contracts::domain::a002_product::ProductCard;
use contracts::shared::envelope::PageMeta;
use leptos::prelude::*;
use std::collections::HashMap;

pub const COLLECTIONS_LOAD_FAILED: &str = "Koleksiyonlar yüklenemedi.";
pub const PRODUCTS_LOAD_FAILED: &str = "Ürünler yüklenemedi.";

/// What a click on a collection's "products" button should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    Close,
    Fetch,
}

#[derive(Clone, Debug)]
pub struct CollectionListState {
    pub collections: Vec<Collection>,
    pub meta: Option<PageMeta>,
    /// 1-based, as the API counts pages
    pub page: u32,
    /// Product drawers currently open, keyed by collection id
    pub open_products: HashMap<String, Vec<ProductCard>>,
    pub loading: bool,
    pub loading_products: Option<String>,
    pub error: Option<String>,
}

impl Default for CollectionListState {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            meta: None,
            page: 1,
            open_products: HashMap::new(),
            loading: false,
            loading_products: None,
            error: None,
        }
    }
}

impl CollectionListState {
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn fetch_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fetch_succeeded(&mut self, collections: Vec<Collection>, meta: Option<PageMeta>) {
        self.loading = false;
        self.collections = collections;
        self.meta = meta;
    }

    /// Previously loaded collections stay on screen
    pub fn fetch_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn products_started(&mut self, collection_id: &str) {
        self.loading_products = Some(collection_id.to_string());
        self.error = None;
    }

    pub fn products_loaded(&mut self, collection_id: &str, products: Vec<ProductCard>) {
        self.loading_products = None;
        self.open_products.insert(collection_id.to_string(), products);
    }

    pub fn products_failed(&mut self, message: String) {
        self.loading_products = None;
        self.error = Some(message);
    }

    pub fn clear_products(&mut self, collection_id: &str) {
        self.open_products.remove(collection_id);
    }

    pub fn is_open(&self, collection_id: &str) -> bool {
        self.open_products.contains_key(collection_id)
    }

    pub fn is_loading_products(&self, collection_id: &str) -> bool {
        self.loading_products.as_deref() == Some(collection_id)
    }

    pub fn toggle_target(&self, collection_id: &str) -> DrawerAction {
        if self.is_open(collection_id) {
            DrawerAction::Close
        } else {
            DrawerAction::Fetch
        }
    }

    /// Buttons 1..=totalPages
    pub fn page_numbers(&self) -> Vec<u32> {
        self.meta
            .as_ref()
            .map(|m| (1..=m.total_pages).collect())
            .unwrap_or_default()
    }

    pub fn has_next_page(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.has_next_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.has_previous_page)
    }

    pub fn total_count(&self) -> u32 {
        self.meta.as_ref().map_or(0, |m| m.total_count)
    }
}

// Create state within component scope instead of thread-local
pub fn create_state() -> RwSignal<CollectionListState> {
    RwSignal::new(CollectionListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(id: usize) -> Collection {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "info": {"name": format!("Koleksiyon {}", id)},
            "salesChannelId": 1
        }))
        .unwrap()
    }

    fn meta(page: u32, has_next: bool) -> PageMeta {
        PageMeta {
            page,
            page_size: 10,
            total_count: 20,
            total_pages: 2,
            has_previous_page: page > 1,
            has_next_page: has_next,
        }
    }

    fn card(code: &str) -> ProductCard {
        ProductCard {
            product_code: code.into(),
            name: code.into(),
            img_url: None,
        }
    }

    #[test]
    fn test_pagination_scenario() {
        let mut state = CollectionListState::default();
        assert_eq!(state.page, 1);

        state.fetch_started();
        assert!(state.loading);
        state.fetch_succeeded((1..=10).map(collection).collect(), Some(meta(1, true)));
        assert!(!state.loading);
        assert_eq!(state.collections.len(), 10);
        assert_eq!(state.page_numbers(), vec![1, 2]);
        assert!(state.has_next_page());
        assert!(!state.has_previous_page());

        state.set_page(2);
        state.fetch_started();
        state.fetch_succeeded((11..=20).map(collection).collect(), Some(meta(2, false)));
        assert_eq!(state.page, 2);
        assert_eq!(state.collections[0].id, "11");
        assert!(!state.has_next_page());
        assert!(state.has_previous_page());
        assert_eq!(state.total_count(), 20);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_page() {
        let mut state = CollectionListState::default();
        state.fetch_succeeded(vec![collection(1)], Some(meta(1, true)));

        state.fetch_started();
        state.fetch_failed(COLLECTIONS_LOAD_FAILED.into());
        assert!(!state.loading);
        assert_eq!(state.collections.len(), 1);
        assert_eq!(state.error.as_deref(), Some(COLLECTIONS_LOAD_FAILED));

        state.fetch_started();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_product_drawer_toggle() {
        let mut state = CollectionListState::default();
        assert_eq!(state.toggle_target("7"), DrawerAction::Fetch);

        state.products_started("7");
        assert!(state.is_loading_products("7"));
        state.products_loaded("7", vec![card("PRD001")]);
        assert!(!state.is_loading_products("7"));
        assert!(state.is_open("7"));
        assert_eq!(state.toggle_target("7"), DrawerAction::Close);

        state.clear_products("7");
        assert!(!state.is_open("7"));
    }

    #[test]
    fn test_empty_drawer_is_still_open() {
        let mut state = CollectionListState::default();
        state.products_loaded("3", Vec::new());
        assert!(state.is_open("3"));
        assert_eq!(state.toggle_target("3"), DrawerAction::Close);
    }

    #[test]
    fn test_products_failure() {
        let mut state = CollectionListState::default();
        state.products_started("9");
        state.products_failed(PRODUCTS_LOAD_FAILED.into());
        assert_eq!(state.loading_products, None);
        assert!(!state.is_open("9"));
        assert_eq!(state.error.as_deref(), Some(PRODUCTS_LOAD_FAILED));
    }

    #[test]
    fn test_no_meta_means_no_controls() {
        let state = CollectionListState::default();
        assert!(state.page_numbers().is_empty());
        assert!(!state.has_next_page());
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn test_page_is_at_least_one() {
        let mut state = CollectionListState::default();
        state.set_page(0);
        assert_eq!(state.page, 1);
    }
}
