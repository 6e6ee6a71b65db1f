//! HTTP helpers for the few requests the portal issues outside native form
//! posts. They apply a consistent abort timeout and map failures into
//! `AppError`. Header values (such as the CSRF token) come from callers and are
//! never logged here.

use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts an empty body with session cookies and the given headers. Any 2xx
/// status is success.
#[cfg(target_arch = "wasm32")]
pub async fn post_empty_with_headers_with_credentials(
    path: &str,
    headers: &[(String, String)],
) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body("")
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured base URL and the provided path. Absolute
/// URLs are returned unchanged.
pub fn build_url(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, trimmed)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
#[cfg(target_arch = "wasm32")]
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(&body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url, build_url_with_base, sanitize_body};

    #[test]
    fn build_url_with_base_joins_single_slash() {
        assert_eq!(
            build_url_with_base("https://portal.example/", "/resend-otp/"),
            "https://portal.example/resend-otp/"
        );
        assert_eq!(build_url_with_base("  ", "/resend-otp/"), "/resend-otp/");
    }

    #[test]
    fn build_url_keeps_absolute_urls() {
        assert_eq!(
            build_url(" https://auth.example/resend-otp/ "),
            "https://auth.example/resend-otp/"
        );
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body(" Forbidden \n"), "Forbidden");
        assert_eq!(sanitize_body(&"x".repeat(500)).len(), 200);
    }
}
