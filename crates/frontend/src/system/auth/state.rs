use contracts::system::auth::TokenPair;

/// Session held in memory for the lifetime of the page
///
/// Nothing is written to browser storage; a reload starts logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<String>,
    pub refresh_expires_in: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn login_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, tokens: TokenPair) {
        self.loading = false;
        self.error = None;
        self.access_token = tokens.access_token().map(str::to_string);
        self.refresh_token = tokens.refresh_token.filter(|t| !t.is_empty());
        self.token_type = tokens.token_type.filter(|t| !t.is_empty());
        self.expires_in = tokens.expires_in;
        self.refresh_expires_in = tokens.refresh_expires_in;
    }

    /// Token fields are left as they were
    pub fn login_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn logout(&mut self) {
        *self = AuthState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: Some("access".into()),
            refresh_token: Some("refresh".into()),
            token_type: Some("Bearer".into()),
            expires_in: Some("3600".into()),
            refresh_expires_in: Some("7200".into()),
        }
    }

    #[test]
    fn test_successful_login() {
        let mut state = AuthState::default();
        state.login_started();
        assert!(state.loading);

        state.login_succeeded(tokens());
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert_eq!(state.access_token.as_deref(), Some("access"));
        assert_eq!(state.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(state.expires_in.as_deref(), Some("3600"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_login_keeps_token_empty() {
        let mut state = AuthState::default();
        state.login_started();
        state.login_failed("Kullanıcı adı veya şifre hatalı".into());

        assert!(!state.loading);
        assert_eq!(state.access_token, None);
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Kullanıcı adı veya şifre hatalı"));
    }

    #[test]
    fn test_new_attempt_clears_previous_error() {
        let mut state = AuthState::default();
        state.login_failed("hata".into());
        state.login_started();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = AuthState::default();
        state.login_succeeded(tokens());
        state.logout();
        assert_eq!(state, AuthState::default());
    }
}
