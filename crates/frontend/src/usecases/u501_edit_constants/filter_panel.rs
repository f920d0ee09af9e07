//! Accordion of filter categories used to narrow the catalog list

use super::view_model::EditConstantsVm;
use crate::shared::icons::icon;
use contracts::domain::a003_collection_filter::FilterDefinition;
use contracts::usecases::u501_edit_constants::RangeBound;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn FilterPanel(vm: EditConstantsVm) -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<String>::new());

    let toggle_category = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let nothing_selected = Signal::derive(move || vm.selection.with(|s| s.is_empty()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel__header">
                <span class="filter-panel__title">
                    {icon("filter")}
                    " Filtreler"
                    {move || {
                        let count = vm.selection.with(|s| s.active_count());
                        (count > 0).then(|| view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{count.to_string()}</Badge> })
                    }}
                </span>
                <button
                    class="button button--ghost"
                    on:click=move |_| vm.clear_filters()
                    prop:disabled=move || vm.loading_products.get()
                >
                    {icon("x")}
                    " Temizle"
                </button>
            </div>

            {move || {
                if vm.loading_filters.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 12px;">
                            <Spinner />
                            <span>"Filtreler yükleniyor..."</span>
                        </Flex>
                    }
                    .into_any();
                }

                let defs = vm.filters.get();
                if defs.is_empty() {
                    return view! { <div class="filter-panel__empty">"Filtre bulunamadı"</div> }
                        .into_any();
                }

                let total = defs.len();
                view! {
                    <div class="filter-panel__summary">
                        {format!("Toplam {} filtre kategorisi yüklendi", total)}
                    </div>
                    <div class="filter-panel__categories">
                        {defs
                            .into_iter()
                            .map(|def| {
                                let id = def.id.clone();
                                let id_open = def.id.clone();
                                view! {
                                    <FilterCategory
                                        vm=vm
                                        definition=def
                                        open=Signal::derive(move || expanded.with(|s| s.contains(&id_open)))
                                        on_toggle=Callback::new(move |_: ()| toggle_category(id.clone()))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            <div class="filter-panel__footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.apply_filters()
                    disabled=Signal::derive(move || nothing_selected.get() || vm.loading_products.get())
                >
                    "Filtreleri Uygula"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn FilterCategory(
    vm: EditConstantsVm,
    definition: FilterDefinition,
    #[prop(into)] open: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let id = definition.id.clone();
    let id_count = id.clone();
    let title = definition.title.clone();

    let body = if definition.is_range() {
        view! { <RangeInputs vm=vm filter_id=id currency=definition.currency.clone() /> }.into_any()
    } else {
        definition
            .values
            .into_iter()
            .map(|v| {
                let label = v.display().to_string();
                let value = v.value;
                let (fid_checked, value_checked) = (id.clone(), value.clone());
                let (fid_change, value_change) = (id.clone(), value);
                view! {
                    <label class="filter-option">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.selection.with(|s| s.is_checked(&fid_checked, &value_checked))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.selection.update(|s| s.toggle_value(&fid_change, &value_change, checked));
                            }
                        />
                        <span>{label}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="filter-category">
            <button class="filter-category__header" on:click=move |_| on_toggle.run(())>
                <span>{title}</span>
                {move || {
                    let n = vm.selection.with(|s| s.selected_count(&id_count));
                    (n > 0).then(|| view! { <span class="filter-category__count">{format!("({})", n)}</span> })
                }}
                {move || if open.get() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>
            <div class="filter-category__body" style:display=move || if open.get() { "block" } else { "none" }>
                {body}
            </div>
        </div>
    }
}

#[component]
fn RangeInputs(vm: EditConstantsVm, filter_id: String, currency: Option<String>) -> impl IntoView {
    let bound_input = move |bound: RangeBound, placeholder: &'static str| {
        let fid_value = filter_id.clone();
        let fid_input = filter_id.clone();
        view! {
            <input
                type="number"
                class="filter-range__input"
                placeholder=placeholder
                prop:value=move || vm.selection.with(|s| s.range_bound(&fid_value, bound))
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    vm.selection.update(|s| s.set_range_bound(&fid_input, bound, &text));
                }
            />
        }
    };

    view! {
        <div class="filter-range">
            {bound_input(RangeBound::Min, "Min")}
            <span class="filter-range__sep">"-"</span>
            {bound_input(RangeBound::Max, "Max")}
            {currency.map(|c| view! { <span class="filter-range__currency">{c}</span> })}
        </div>
    }
}
