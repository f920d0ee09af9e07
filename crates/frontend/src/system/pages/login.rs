use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let is_loading = move || auth_state.with(|s| s.loading);
    let error_message = move || auth_state.with(|s| s.error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        // Успешный вход сам переключит RequireAuth на содержимое
        spawn_local(async move {
            do_login(username_val, password_val, set_auth_state).await;
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LOGO"</h1>
                <h2>"Hesabınıza giriş yapın"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"E-Posta"</label>
                        <input
                            type="email"
                            id="username"
                            autocomplete="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Şifre"</label>
                        <div class="form-group__with-action">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                autocomplete="current-password"
                                value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=is_loading
                            />
                            <button
                                type="button"
                                class="form-group__action"
                                aria-label="şifreyi göster"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                            </button>
                        </div>
                    </div>

                    {move || error_message().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <Show when=is_loading>
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-md);">
                            <Spinner />
                        </Flex>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=is_loading
                    >
                        "Giriş Yap"
                    </button>
                </form>
            </div>
        </div>
    }
}
