use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - numbered server-side pagination
///
/// Pages are 1-based, as the API counts them. The "previous" / "next"
/// buttons are only rendered when the server reports such a page exists.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Page numbers to render as buttons
    #[prop(into)]
    page_numbers: Signal<Vec<u32>>,

    /// Total number of items (shown next to the buttons)
    #[prop(into)]
    total_count: Signal<u32>,

    /// `meta.hasPreviousPage`
    #[prop(into)]
    has_previous: Signal<bool>,

    /// `meta.hasNextPage`
    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <Show when=move || has_previous.get()>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    title="Önceki sayfa"
                >
                    {icon("chevron-left")}
                </button>
            </Show>
            <For
                each=move || page_numbers.get()
                key=|p| *p
                children=move |p| {
                    view! {
                        <button
                            class=move || {
                                if current_page.get() == p {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                }
                            }
                            on:click=move |_| on_page_change.run(p)
                        >
                            {p.to_string()}
                        </button>
                    }
                }
            />
            <Show when=move || has_next.get()>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    title="Sonraki sayfa"
                >
                    {icon("chevron-right")}
                </button>
            </Show>
            <span class="pagination-info">
                {move || format!("Toplam {}", total_count.get())}
            </span>
        </div>
    }
}
