use super::api;
use super::board::{ConstantsBoard, DragOutcome, DropTarget};
use crate::domain::a001_collection::api as collection_api;
use crate::domain::a001_collection::ui::list::state::PRODUCTS_LOAD_FAILED;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ApiError;
use crate::shared::config::config;
use crate::system::auth::context::{access_token, logout_if_unauthorized};
use crate::system::auth::state::AuthState;
use contracts::domain::a002_product::ProductCard;
use contracts::domain::a003_collection_filter::FilterDefinition;
use contracts::usecases::u501_edit_constants::{
    to_additional_filters, AdditionalFilter, FilterSelection, GetProductsForConstantsRequest,
};
use leptos::prelude::*;

pub const FILTERS_LOAD_FAILED: &str = "Filtreler yüklenemedi.";
pub const SAVE_FAILED: &str = "Sabitler kaydedilemedi.";
pub const SAVE_SUCCEEDED: &str = "Sabitler başarıyla kaydedildi!";

/// How long the success notice stays up before returning to the list
const NOTICE_DELAY_MS: u32 = 1500;

/// ViewModel of the constants editor
#[derive(Clone, Copy)]
pub struct EditConstantsVm {
    pub collection_id: RwSignal<String>,
    pub board: RwSignal<ConstantsBoard>,
    pub filters: RwSignal<Vec<FilterDefinition>>,
    pub selection: RwSignal<FilterSelection>,
    pub loading_products: RwSignal<bool>,
    pub loading_filters: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    /// Product code of the card being dragged
    pub dragging: RwSignal<Option<String>>,
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
    ctx: AppGlobalContext,
}

impl EditConstantsVm {
    pub fn new(
        auth_state: ReadSignal<AuthState>,
        set_auth_state: WriteSignal<AuthState>,
        ctx: AppGlobalContext,
    ) -> Self {
        Self {
            collection_id: RwSignal::new(String::new()),
            board: RwSignal::new(ConstantsBoard::new()),
            filters: RwSignal::new(Vec::new()),
            selection: RwSignal::new(FilterSelection::new()),
            loading_products: RwSignal::new(false),
            loading_filters: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            dragging: RwSignal::new(None),
            auth_state,
            set_auth_state,
            ctx,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading_products.get() || self.saving.get()
    }

    /// Surface a failed call, or drop to the login page when the session is gone
    fn report(&self, err: &ApiError, fallback: &str) {
        if !logout_if_unauthorized(err, self.set_auth_state) {
            self.error.set(Some(err.user_message(fallback)));
        }
    }

    /// Fetch the collection's products and its filter categories
    pub fn load(&self, collection_id: String) {
        self.collection_id.set(collection_id.clone());
        self.selection.set(FilterSelection::new());
        self.error.set(None);
        self.notice.set(None);
        self.fetch_products(Vec::new(), true);
        self.load_filters(collection_id);
    }

    fn load_filters(&self, collection_id: String) {
        let vm = *self;
        vm.loading_filters.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match access_token(vm.auth_state) {
                Ok(token) => api::fetch_filters_for_constants(&token, &collection_id).await,
                Err(e) => Err(e),
            };
            vm.loading_filters.set(false);
            match result {
                Ok(defs) => {
                    log::debug!("Loaded {} filter categories for {}", defs.len(), collection_id);
                    vm.filters.set(defs);
                }
                Err(e) => {
                    log::error!("Failed to load filters of {}: {}", collection_id, e);
                    vm.report(&e, FILTERS_LOAD_FAILED);
                }
            }
        });
    }

    /// `initial` seeds the board from scratch, otherwise pinned constants are kept
    fn fetch_products(&self, additional_filters: Vec<AdditionalFilter>, initial: bool) {
        let vm = *self;
        let collection_id = vm.collection_id.get_untracked();
        let request = GetProductsForConstantsRequest {
            additional_filters,
            ..GetProductsForConstantsRequest::unfiltered(config().constants.page_size)
        };

        vm.loading_products.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match access_token(vm.auth_state) {
                Ok(token) => {
                    collection_api::fetch_products_for_constants(&token, &collection_id, &request)
                        .await
                }
                Err(e) => Err(e),
            };
            vm.loading_products.set(false);
            match result {
                Ok(products) => {
                    let cards: Vec<ProductCard> =
                        products.into_iter().map(ProductCard::from).collect();
                    log::debug!("Fetched {} products for {}", cards.len(), collection_id);
                    vm.board.update(|b| {
                        if initial {
                            b.load(cards);
                        } else {
                            b.replace_available(cards);
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to load products of {}: {}", collection_id, e);
                    vm.report(&e, PRODUCTS_LOAD_FAILED);
                }
            }
        });
    }

    /// Re-query the catalog with the current filter selection
    pub fn apply_filters(&self) {
        let query = self
            .selection
            .with_untracked(|sel| self.filters.with_untracked(|defs| to_additional_filters(sel, defs)));
        log::info!("Applying {} filter conditions", query.len());
        self.fetch_products(query, false);
    }

    pub fn clear_filters(&self) {
        self.selection.update(FilterSelection::clear);
        self.fetch_products(Vec::new(), false);
    }

    pub fn drag_start(&self, code: String) {
        self.dragging.set(Some(code));
    }

    pub fn drag_end(&self) {
        self.dragging.set(None);
    }

    /// Finish the current drag on `target`
    pub fn drop_on(&self, target: DropTarget) {
        let Some(active) = self.dragging.get_untracked() else {
            return;
        };
        let outcome = self
            .board
            .try_update(|b| b.apply_drag(&active, Some(target)))
            .unwrap_or(DragOutcome::Ignored);
        log::debug!("drag {} -> {:?}", active, outcome);
        self.dragging.set(None);
    }

    pub fn remove_constant(&self, code: &str) {
        self.board.update(|b| {
            b.remove_constant(code);
        });
    }

    /// Save the pinned order, then go back to the collection list
    pub fn save(&self) {
        let vm = *self;
        let collection_id = vm.collection_id.get_untracked();
        let codes = vm.board.with_untracked(ConstantsBoard::constant_codes);

        vm.saving.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match access_token(vm.auth_state) {
                Ok(token) => api::update_constants(&token, &collection_id, codes).await,
                Err(e) => Err(e),
            };
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("Constants of {} saved", collection_id);
                    vm.notice.set(Some(SAVE_SUCCEEDED.to_string()));
                    gloo_timers::future::TimeoutFuture::new(NOTICE_DELAY_MS).await;
                    // The user may have left the editor while the notice was up
                    if vm.ctx.active.with_untracked(|v| v.is_editing(&collection_id)) {
                        vm.ctx.open_collections();
                    }
                }
                Err(e) => {
                    log::error!("Failed to save constants of {}: {}", collection_id, e);
                    vm.report(&e, SAVE_FAILED);
                }
            }
        });
    }

    pub fn cancel(&self) {
        self.ctx.open_collections();
    }
}
