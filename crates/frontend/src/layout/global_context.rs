use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Screen shown in the main area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Collections,
    EditConstants { collection_id: String },
}

/// Query-string form of [`ActiveView`]: `?active=edit&id=42`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ViewQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl ActiveView {
    pub fn from_query(search: &str) -> Self {
        let query: ViewQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match (query.active.as_deref(), query.id) {
            (Some("edit"), Some(id)) if !id.is_empty() => ActiveView::EditConstants { collection_id: id },
            _ => ActiveView::Collections,
        }
    }

    /// Whether this is the constants editor of `collection_id`
    pub fn is_editing(&self, collection_id: &str) -> bool {
        matches!(self, ActiveView::EditConstants { collection_id: id } if id == collection_id)
    }

    pub fn to_query(&self) -> String {
        let query = match self {
            ActiveView::Collections => ViewQuery {
                active: Some("collections".to_string()),
                id: None,
            },
            ActiveView::EditConstants { collection_id } => ViewQuery {
                active: Some("edit".to_string()),
                id: Some(collection_id.clone()),
            },
        };
        format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ActiveView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActiveView::Collections),
        }
    }

    /// Restore the view from `location.search` and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(ActiveView::from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.with(ActiveView::to_query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_collections(&self) {
        log::debug!("navigate: collections");
        self.active.set(ActiveView::Collections);
    }

    pub fn open_editor(&self, collection_id: &str) {
        log::debug!("navigate: edit constants of {}", collection_id);
        self.active.set(ActiveView::EditConstants {
            collection_id: collection_id.to_string(),
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
