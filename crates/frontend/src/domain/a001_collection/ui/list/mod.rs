pub mod state;

use self::state::{create_state, DrawerAction, COLLECTIONS_LOAD_FAILED, PRODUCTS_LOAD_FAILED};
use crate::domain::a001_collection::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::{access_token, logout_if_unauthorized, use_auth};
use contracts::domain::a001_collection::{Collection, FilterCondition};
use contracts::domain::a002_product::ProductCard;
use contracts::usecases::u501_edit_constants::GetProductsForConstantsRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Shown instead of a product image that the server did not send.
/// Copied to the bundle root from `public/` by `index.html`.
pub const PLACEHOLDER_IMAGE: &str = "/window.svg";

pub fn image_src(product: &ProductCard) -> String {
    product
        .img_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

fn condition_text(condition: &FilterCondition) -> String {
    format!(
        "Ürün {} bilgisi Şuna Eşit: {}",
        condition.title,
        condition.display_value()
    )
}

/// One line per condition, or a single "no conditions" line
pub fn condition_lines(collection: &Collection) -> Vec<String> {
    let lines: Vec<String> = collection.conditions().iter().map(condition_text).collect();
    if lines.is_empty() {
        vec!["Koşul yok".to_string()]
    } else {
        lines
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CollectionsPage() -> impl IntoView {
    let state = create_state();
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();

    let load_collections = move || {
        let page = state.with_untracked(|s| s.page);
        let page_size = config().collections.page_size;
        state.update(|s| s.fetch_started());

        spawn_local(async move {
            let result = match access_token(auth_state) {
                Ok(token) => api::fetch_collections(&token, page, page_size).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(envelope) => {
                    log::debug!(
                        "Loaded {} collections (page {})",
                        envelope.data.len(),
                        page
                    );
                    state.update(|s| s.fetch_succeeded(envelope.data, envelope.meta));
                }
                Err(e) => {
                    log::error!("Failed to load collections: {}", e);
                    if !logout_if_unauthorized(&e, set_auth_state) {
                        state.update(|s| s.fetch_failed(e.user_message(COLLECTIONS_LOAD_FAILED)));
                    } else {
                        state.update(|s| s.loading = false);
                    }
                }
            }
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        load_collections();
    });

    let go_to_page = move |page: u32| {
        state.update(|s| s.set_page(page));
        load_collections();
    };

    let toggle_products = move |collection_id: String| {
        if state.with_untracked(|s| s.toggle_target(&collection_id)) == DrawerAction::Close {
            state.update(|s| s.clear_products(&collection_id));
            return;
        }

        state.update(|s| s.products_started(&collection_id));
        let request = GetProductsForConstantsRequest::unfiltered(config().constants.page_size);

        spawn_local(async move {
            let result: Result<Vec<ProductCard>, ApiError> = match access_token(auth_state) {
                Ok(token) => api::fetch_products_for_constants(&token, &collection_id, &request)
                    .await
                    .map(|products| products.into_iter().map(ProductCard::from).collect()),
                Err(e) => Err(e),
            };
            match result {
                Ok(products) => {
                    state.update(|s| s.products_loaded(&collection_id, products));
                }
                Err(e) => {
                    log::error!("Failed to load products of {}: {}", collection_id, e);
                    if !logout_if_unauthorized(&e, set_auth_state) {
                        state.update(|s| s.products_failed(e.user_message(PRODUCTS_LOAD_FAILED)));
                    }
                }
            }
        });
    };

    view! {
        <div class="collections-page">
            <div class="page-header">
                <h2 class="page-header__title">{icon("products")} " Koleksiyonlar"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_collections()
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("refresh")}
                    " Yenile"
                </Button>
            </div>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Show when=move || state.with(|s| s.loading)>
                <Flex gap=FlexGap::Small style="align-items: center; padding: 16px;">
                    <Spinner />
                    <span>"Koleksiyonlar yükleniyor..."</span>
                </Flex>
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Başlık"</th>
                            <th>"Ürün Koşulları"</th>
                            <th>"Satış Kanalı"</th>
                            <th>"İşlemler"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.collections.clone())
                            key=|c| c.id.clone()
                            children=move |collection| {
                                let id = collection.id.clone();
                                let id_edit = id.clone();
                                let id_toggle = id.clone();
                                let id_open = id.clone();
                                let id_loading = id.clone();
                                let id_drawer = id.clone();
                                let lines = condition_lines(&collection);

                                view! {
                                    <tr>
                                        <td class="cell-truncate">{collection.display_name().to_string()}</td>
                                        <td class="collection-conditions">
                                            {lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                                        </td>
                                        <td>{collection.sales_channel().to_string()}</td>
                                        <td>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    on_click=move |_| ctx.open_editor(&id_edit)
                                                >
                                                    {icon("edit")}
                                                    " Sabitleri Düzenle"
                                                </Button>
                                                <button
                                                    class="button button--secondary"
                                                    prop:disabled=move || state.with(|s| s.is_loading_products(&id_loading))
                                                    on:click=move |_| toggle_products(id_toggle.clone())
                                                    title="Ürünler"
                                                >
                                                    {move || if state.with(|s| s.is_open(&id_open)) {
                                                        icon("eye-off")
                                                    } else {
                                                        icon("eye")
                                                    }}
                                                </button>
                                            </Flex>
                                        </td>
                                    </tr>
                                    {move || state.with(|s| s.open_products.get(&id_drawer).cloned()).map(|products| view! {
                                        <tr class="collection-products">
                                            <td colspan="4">
                                                <ProductStrip products=products />
                                            </td>
                                        </tr>
                                    })}
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                page_numbers=Signal::derive(move || state.with(|s| s.page_numbers()))
                total_count=Signal::derive(move || state.with(|s| s.total_count()))
                has_previous=Signal::derive(move || state.with(|s| s.has_previous_page()))
                has_next=Signal::derive(move || state.with(|s| s.has_next_page()))
                on_page_change=Callback::new(go_to_page)
            />
        </div>
    }
}

/// Read-only row of product cards under a collection
#[component]
fn ProductStrip(products: Vec<ProductCard>) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="product-strip product-strip--empty">"Ürün bulunamadı"</div> }
            .into_any();
    }

    view! {
        <div class="product-strip">
            {products.into_iter().map(|p| {
                let src = image_src(&p);
                let code = p.product_code.clone();
                view! {
                    <div class="product-card product-card--small" title=code>
                        <img class="product-card__image" src=src alt=p.name.clone() />
                        <div class="product-card__name">{p.name}</div>
                        <div class="product-card__code">{p.product_code}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(json: serde_json::Value) -> Collection {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_condition_lines() {
        let c = collection(serde_json::json!({
            "id": 1,
            "filters": {"filters": [
                {"id": "color", "title": "Renk", "value": "1", "valueName": "Kırmızı"},
                {"id": "size", "title": "Beden", "value": "M", "valueName": null}
            ]}
        }));
        assert_eq!(
            condition_lines(&c),
            vec![
                "Ürün Renk bilgisi Şuna Eşit: Kırmızı".to_string(),
                "Ürün Beden bilgisi Şuna Eşit: M".to_string(),
            ]
        );
    }

    #[test]
    fn test_image_src_falls_back_to_placeholder() {
        let mut card = ProductCard {
            product_code: "PRD001".into(),
            name: "Gömlek".into(),
            img_url: None,
        };
        assert_eq!(image_src(&card), PLACEHOLDER_IMAGE);

        card.img_url = Some("https://cdn.example.com/p.jpg".into());
        assert_eq!(image_src(&card), "https://cdn.example.com/p.jpg");
    }

    #[test]
    fn test_placeholder_is_shipped_with_the_bundle() {
        let index = include_str!("../../../../../index.html");
        let asset = PLACEHOLDER_IMAGE.trim_start_matches('/');
        assert!(index.contains(&format!("href=\"public/{}\"", asset)));
        assert!(!include_str!("../../../../../public/window.svg").is_empty());
    }

    #[test]
    fn test_condition_lines_without_filters() {
        let c = collection(serde_json::json!({"id": "x"}));
        assert_eq!(condition_lines(&c), vec!["Koşul yok".to_string()]);
    }
}
