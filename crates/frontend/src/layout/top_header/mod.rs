//! TopHeader component - application top navigation bar.
//!
//! Contains the application title, the link back to the collection list
//! and the logout button.

use crate::layout::global_context::{use_global_context, ActiveView};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (_, set_auth_state) = use_auth();

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.open_collections();
    };

    let on_collections = move || ctx.active.with(|v| *v == ActiveView::Collections);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("products")}
                <span class="top-header__title">"Secil Store"</span>
            </div>

            <nav class="top-header__nav">
                <button
                    class=move || if on_collections() {
                        "top-header__nav-item top-header__nav-item--active"
                    } else {
                        "top-header__nav-item"
                    }
                    on:click=move |_| ctx.open_collections()
                >
                    "Koleksiyonlar"
                </button>
            </nav>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Çıkış">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
