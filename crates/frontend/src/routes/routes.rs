use crate::domain::a001_collection::ui::list::CollectionsPage;
use crate::layout::global_context::{use_global_context, ActiveView};
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::usecases::u501_edit_constants::EditConstantsPage;
use leptos::prelude::*;

/// Screen for the active view
fn render_view(view: ActiveView) -> AnyView {
    match view {
        ActiveView::Collections => view! { <CollectionsPage /> }.into_any(),
        ActiveView::EditConstants { collection_id } => {
            view! { <EditConstantsPage collection_id=collection_id /> }.into_any()
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || view! { {move || render_view(ctx.active.get())} }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
