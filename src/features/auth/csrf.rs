//! Anti-forgery token lookup. The server hands the token to the page in one of
//! three places, checked in order: `window.PORTAL_CONFIG.csrf_token`, a hidden
//! `csrfmiddlewaretoken` input, or the `csrftoken` cookie. The token is wrapped
//! in `SecretString` so it never shows up in `Debug` output or logs.

use secrecy::SecretString;

/// Form field carrying the token on native posts.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
/// Header carrying the token on `fetch` requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Cookie set by the server alongside the token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

fn normalize_token(value: &str) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::from(trimmed.to_string()))
    }
}

/// Extracts `name` from a `document.cookie` string.
fn token_from_cookies(cookies: &str, name: &str) -> Option<SecretString> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| normalize_token(value))
}

#[cfg(target_arch = "wasm32")]
pub fn csrf_token() -> Result<SecretString, crate::app_lib::AppError> {
    use crate::app_lib::{
        AppError,
        config::{read_runtime_value, runtime_object},
    };
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, HtmlInputElement};

    if let Some(token) = runtime_object()
        .and_then(|object| read_runtime_value(&object, "csrf_token"))
        .and_then(|value| normalize_token(&value))
    {
        return Ok(token);
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Config("Document is not available.".to_string()))?;

    let selector = format!("[name={CSRF_FIELD_NAME}]");
    if let Some(token) = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| normalize_token(&input.value()))
    {
        return Ok(token);
    }

    document
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|document| document.cookie().ok())
        .and_then(|cookies| token_from_cookies(&cookies, CSRF_COOKIE_NAME))
        .ok_or_else(|| AppError::Config("Security token is missing. Reload the page.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::{CSRF_COOKIE_NAME, normalize_token, token_from_cookies};
    use secrecy::ExposeSecret;

    #[test]
    fn normalize_token_trims_and_rejects_empty() {
        assert!(normalize_token("  ").is_none());
        let token = normalize_token(" abc123 ").unwrap();
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn token_from_cookies_finds_named_cookie() {
        let cookies = "sessionid=s1; csrftoken=tok=en; theme=dark";
        let token = token_from_cookies(cookies, CSRF_COOKIE_NAME).unwrap();
        assert_eq!(token.expose_secret(), "tok=en");
        assert!(token_from_cookies("sessionid=s1", CSRF_COOKIE_NAME).is_none());
        assert!(token_from_cookies("csrftoken=", CSRF_COOKIE_NAME).is_none());
        assert!(token_from_cookies("", CSRF_COOKIE_NAME).is_none());
    }

    #[test]
    fn token_debug_output_is_redacted() {
        let token = normalize_token("abc123").unwrap();
        assert!(!format!("{token:?}").contains("abc123"));
    }
}
