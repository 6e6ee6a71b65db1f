//! Client wrapper for the one auth endpoint called with `fetch`. Native form
//! posts cover login, signup, code verification, and password reset.

use crate::{
    app_lib::{AppError, config::AppConfig, post_empty_with_headers_with_credentials},
    features::auth::csrf::{CSRF_HEADER, csrf_token},
};
use secrecy::ExposeSecret;
use tracing::{info, warn};

/// Asks the server to email a fresh one-time code. Any 2xx status is success.
/// The CSRF token travels in a header and must never be logged.
pub async fn resend_otp() -> Result<(), AppError> {
    let config = AppConfig::load();
    let token = csrf_token()?;
    let headers = vec![(CSRF_HEADER.to_string(), token.expose_secret().to_string())];

    match post_empty_with_headers_with_credentials(&config.resend_otp_url, &headers).await {
        Ok(()) => {
            info!("resend request accepted");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "resend request failed");
            Err(err)
        }
    }
}
