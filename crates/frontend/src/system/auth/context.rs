use leptos::prelude::*;

use super::api;
use super::state::AuthState;
use crate::shared::api_utils::ApiError;

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Current access token without subscribing the caller
pub fn access_token(auth_state: ReadSignal<AuthState>) -> Result<String, ApiError> {
    auth_state
        .with_untracked(|s| s.access_token.clone())
        .ok_or(ApiError::MissingToken)
}

/// Helper: Perform login
///
/// The signal is passed in because context lookups are not available
/// after the first `.await`.
pub async fn do_login(username: String, password: String, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(AuthState::login_started);

    match api::login(username.clone(), password).await {
        Ok(tokens) => {
            log::info!("Login succeeded for {}", username);
            set_auth_state.update(|s| s.login_succeeded(tokens));
        }
        Err(e) => {
            log::warn!("Login failed for {}: {}", username, e);
            let message = api::login_error_message(&e);
            set_auth_state.update(|s| s.login_failed(message));
        }
    }
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("Logging out");
    set_auth_state.update(AuthState::logout);
}

/// Drop the session when an API call reports it is no longer valid
///
/// Returns `true` when the error was handled this way.
pub fn logout_if_unauthorized(err: &ApiError, set_auth_state: WriteSignal<AuthState>) -> bool {
    if err.requires_login() {
        log::warn!("Session rejected by API ({}), returning to login", err);
        do_logout(set_auth_state);
        true
    } else {
        false
    }
}
