use contracts::shared::envelope::{error_message_from_body, ApiEnvelope};
use contracts::system::auth::{LoginRequest, TokenPair};

use crate::shared::api_utils::{self, ApiError, RawResponse};

pub const LOGIN_FAILED: &str = "Giriş başarısız";
pub const UNEXPECTED_ERROR: &str = "Bir hata oluştu";

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<TokenPair, ApiError> {
    let request = LoginRequest { username, password };
    let raw = api_utils::post("/Auth/Login", None, &request).await?;
    interpret_login(raw)
}

/// A login only succeeds on 2xx with a non-empty `data.accessToken`
///
/// The server message is read from the raw body, so it survives a `data`
/// field of any shape.
pub fn interpret_login(raw: RawResponse) -> Result<TokenPair, ApiError> {
    let tokens = serde_json::from_str::<ApiEnvelope<TokenPair>>(&raw.body)
        .ok()
        .and_then(|e| e.data)
        .filter(|t| raw.ok() && t.access_token().is_some());

    match tokens {
        Some(tokens) => Ok(tokens),
        None => Err(ApiError::Rejected(
            error_message_from_body(&raw.body).unwrap_or_else(|| LOGIN_FAILED.to_string()),
        )),
    }
}

/// Text for the login form alert
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(m) if !m.is_empty() => m.clone(),
        ApiError::Network(m) if !m.is_empty() => m.clone(),
        ApiError::Rejected(_) => LOGIN_FAILED.to_string(),
        _ => UNEXPECTED_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_login_success() {
        let tokens = interpret_login(raw(
            200,
            r#"{"data":{"accessToken":"t1","refreshToken":"r1","tokenType":"Bearer","expiresIn":60,"refreshExpiresIn":120}}"#,
        ))
        .unwrap();
        assert_eq!(tokens.access_token(), Some("t1"));
    }

    #[test]
    fn test_login_failure_surfaces_server_message() {
        let err = interpret_login(raw(401, r#"{"message":"Kullanıcı adı veya şifre hatalı"}"#))
            .unwrap_err();
        assert_eq!(login_error_message(&err), "Kullanıcı adı veya şifre hatalı");
    }

    #[test]
    fn test_message_kept_when_data_is_not_a_token_object() {
        let err = interpret_login(raw(
            401,
            r#"{"status":401,"message":"Şifre hatalı","data":"invalid_grant"}"#,
        ))
        .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Şifre hatalı".into()));

        let err = interpret_login(raw(400, r#"{"message":"Hesap kilitli","data":[]}"#)).unwrap_err();
        assert_eq!(login_error_message(&err), "Hesap kilitli");
    }

    #[test]
    fn test_login_with_string_lifetime() {
        let tokens = interpret_login(raw(200, r#"{"data":{"accessToken":"t","expiresIn":"3600"}}"#))
            .unwrap();
        assert_eq!(tokens.access_token(), Some("t"));
        assert_eq!(tokens.expires_in.as_deref(), Some("3600"));
    }

    #[test]
    fn test_login_without_token_fails_with_default() {
        let err = interpret_login(raw(200, r#"{"data":{}}"#)).unwrap_err();
        assert_eq!(login_error_message(&err), LOGIN_FAILED);

        let err = interpret_login(raw(500, "Internal Server Error")).unwrap_err();
        assert_eq!(login_error_message(&err), LOGIN_FAILED);
    }

    #[test]
    fn test_token_on_error_status_is_ignored() {
        let err = interpret_login(raw(403, r#"{"data":{"accessToken":"x"}}"#));
        assert!(err.is_err());
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(
            login_error_message(&ApiError::Network("Failed to fetch".into())),
            "Failed to fetch"
        );
        assert_eq!(login_error_message(&ApiError::Network(String::new())), UNEXPECTED_ERROR);
        assert_eq!(login_error_message(&ApiError::Decode("eof".into())), UNEXPECTED_ERROR);
    }
}
