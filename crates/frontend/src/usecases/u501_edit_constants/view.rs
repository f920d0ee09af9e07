use super::board::{BoardZone, DropTarget};
use super::filter_panel::FilterPanel;
use super::view_model::EditConstantsVm;
use crate::domain::a001_collection::ui::list::image_src;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::a002_product::ProductCard;
use leptos::prelude::*;
use thaw::*;
use web_sys::DragEvent;

const DRAG_FORMAT: &str = "text/plain";

/// Constants editor of one collection
#[component]
pub fn EditConstantsPage(collection_id: String) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let vm = EditConstantsVm::new(auth_state, set_auth_state, use_global_context());

    vm.load(collection_id);

    view! {
        <div class="edit-constants">
            <div class="page-header">
                <h2 class="page-header__title">
                    {icon("edit")}
                    " Sabitleri Düzenle"
                </h2>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel()
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        "Vazgeç"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save()
                        disabled=Signal::derive(move || vm.is_busy())
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Kaydediliyor..." } else { " Kaydet" }}
                    </Button>
                </Flex>
            </div>

            {move || vm.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || vm.notice.get().map(|msg| view! {
                <div class="alert alert--success">{msg}</div>
            })}

            <div class="edit-constants__body">
                <FilterPanel vm=vm />

                <div class="edit-constants__column">
                    <h3 class="edit-constants__column-title">"Koleksiyon Ürünleri"</h3>
                    <Show when=move || vm.loading_products.get()>
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 12px;">
                            <Spinner />
                            <span>"Ürünler yükleniyor..."</span>
                        </Flex>
                    </Show>
                    <div
                        class="product-grid product-grid--available"
                        on:dragover=allow_drop
                        on:drop=move |ev: DragEvent| {
                            ev.prevent_default();
                            vm.drop_on(DropTarget::Zone(BoardZone::Available));
                        }
                    >
                        <For
                            each=move || vm.board.with(|b| b.available().to_vec())
                            key=|p| p.product_code.clone()
                            children=move |product| view! { <DraggableCard vm=vm product=product removable=false /> }
                        />
                    </div>
                </div>

                <div class="edit-constants__column">
                    <h3 class="edit-constants__column-title">
                        "Sabitler "
                        {move || format!("({})", vm.board.with(|b| b.constants().len()))}
                    </h3>
                    <div
                        class="product-grid product-grid--constants"
                        on:dragover=allow_drop
                        on:drop=move |ev: DragEvent| {
                            ev.prevent_default();
                            vm.drop_on(DropTarget::Zone(BoardZone::Constants));
                        }
                    >
                        <For
                            each=move || vm.board.with(|b| b.constants().to_vec())
                            key=|p| p.product_code.clone()
                            children=move |product| view! { <DraggableCard vm=vm product=product removable=true /> }
                        />
                        {move || {
                            let slots = vm.board.with(|b| b.empty_slots());
                            (0..slots)
                                .map(|_| view! { <div class="product-card product-card--slot"></div> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn allow_drop(ev: DragEvent) {
    ev.prevent_default();
}

/// Log a failed DOM call; the drag still works from the in-memory state
fn dom_ok<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{} failed: {:?}", action, e);
            false
        }
    }
}

#[component]
fn DraggableCard(vm: EditConstantsVm, product: ProductCard, removable: bool) -> impl IntoView {
    let code_start = product.product_code.clone();
    let code_drop = product.product_code.clone();
    let code_remove = product.product_code.clone();
    let code_dragging = product.product_code.clone();
    let src = image_src(&product);

    view! {
        <div
            class=move || {
                if vm.dragging.with(|d| d.as_deref() == Some(code_dragging.as_str())) {
                    "product-card product-card--dragging"
                } else {
                    "product-card"
                }
            }
            draggable="true"
            on:dragstart=move |ev: DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    dom_ok("dragstart set_data", dt.set_data(DRAG_FORMAT, &code_start));
                }
                vm.drag_start(code_start.clone());
            }
            on:dragover=allow_drop
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                vm.drop_on(DropTarget::Item(code_drop.clone()));
            }
            on:dragend=move |_| vm.drag_end()
        >
            <img class="product-card__image" src=src alt=product.name.clone() draggable="false" />
            <div class="product-card__name">{product.name.clone()}</div>
            <div class="product-card__code">{product.product_code.clone()}</div>
            {removable.then(|| view! {
                <button
                    class="product-card__remove"
                    title="Kaldır"
                    on:click=move |_| vm.remove_constant(&code_remove)
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
