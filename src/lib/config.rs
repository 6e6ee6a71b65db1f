//! Build-time configuration for the portal form endpoints with an optional
//! runtime override. The runtime config is read from `window.PORTAL_CONFIG`
//! (if present) so the server templates can point forms at their own routes
//! and mark the active auth tab without rebuilding. Configuration values are
//! public; the CSRF token is read separately by `features::auth::csrf`.

use crate::features::auth::mode::AuthMode;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub signup_url: String,
    pub verify_otp_url: String,
    pub resend_otp_url: String,
    pub reset_request_url: String,
    pub reset_confirm_url: String,
    pub google_login_url: String,
    pub discord_login_url: String,
    pub log_level: String,
    pub initial_mode: AuthMode,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("PORTAL_API_BASE_URL").unwrap_or("").to_string(),
            login_url: option_env!("PORTAL_LOGIN_URL").unwrap_or("/login/").to_string(),
            signup_url: option_env!("PORTAL_SIGNUP_URL").unwrap_or("/signup/").to_string(),
            verify_otp_url: option_env!("PORTAL_VERIFY_OTP_URL")
                .unwrap_or("/verify-otp/")
                .to_string(),
            resend_otp_url: option_env!("PORTAL_RESEND_OTP_URL")
                .unwrap_or("/resend-otp/")
                .to_string(),
            reset_request_url: option_env!("PORTAL_RESET_REQUEST_URL")
                .unwrap_or("/reset-password/")
                .to_string(),
            reset_confirm_url: option_env!("PORTAL_RESET_CONFIRM_URL")
                .unwrap_or("/reset-password/")
                .to_string(),
            google_login_url: option_env!("PORTAL_GOOGLE_LOGIN_URL")
                .unwrap_or("/accounts/google/login/")
                .to_string(),
            discord_login_url: option_env!("PORTAL_DISCORD_LOGIN_URL")
                .unwrap_or("/accounts/discord/login/")
                .to_string(),
            log_level: option_env!("PORTAL_LOG_LEVEL").unwrap_or("info").to_string(),
            initial_mode: AuthMode::from_marker(option_env!("PORTAL_ACTIVE_FORM")),
        }
    }

    /// Form action for the reset confirmation of `token`.
    pub fn reset_confirm_action(&self, token: &str) -> String {
        format!(
            "{}/{}/",
            self.reset_confirm_url.trim_end_matches('/'),
            token.trim().trim_matches('/')
        )
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    login_url: Option<String>,
    signup_url: Option<String>,
    verify_otp_url: Option<String>,
    resend_otp_url: Option<String>,
    reset_request_url: Option<String>,
    reset_confirm_url: Option<String>,
    google_login_url: Option<String>,
    discord_login_url: Option<String>,
    log_level: Option<String>,
    active_form: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    let overrides = [
        (&mut config.api_base_url, runtime.api_base_url),
        (&mut config.login_url, runtime.login_url),
        (&mut config.signup_url, runtime.signup_url),
        (&mut config.verify_otp_url, runtime.verify_otp_url),
        (&mut config.resend_otp_url, runtime.resend_otp_url),
        (&mut config.reset_request_url, runtime.reset_request_url),
        (&mut config.reset_confirm_url, runtime.reset_confirm_url),
        (&mut config.google_login_url, runtime.google_login_url),
        (&mut config.discord_login_url, runtime.discord_login_url),
        (&mut config.log_level, runtime.log_level),
    ];
    for (target, value) in overrides {
        if let Some(value) = value {
            *target = value;
        }
    }
    if let Some(marker) = runtime.active_form {
        config.initial_mode = AuthMode::from_marker(Some(&marker));
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    let object = runtime_object()?;

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        login_url: read_runtime_value(&object, "login_url"),
        signup_url: read_runtime_value(&object, "signup_url"),
        verify_otp_url: read_runtime_value(&object, "verify_otp_url"),
        resend_otp_url: read_runtime_value(&object, "resend_otp_url"),
        reset_request_url: read_runtime_value(&object, "reset_request_url"),
        reset_confirm_url: read_runtime_value(&object, "reset_confirm_url"),
        google_login_url: read_runtime_value(&object, "google_login_url"),
        discord_login_url: read_runtime_value(&object, "discord_login_url"),
        log_level: read_runtime_value(&object, "log_level"),
        active_form: read_runtime_value(&object, "active_form"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// The `window.PORTAL_CONFIG` object, when the host page defines one.
#[cfg(target_arch = "wasm32")]
pub(crate) fn runtime_object() -> Option<js_sys::Object> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    Some(Object::from(config))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

pub(crate) fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, AuthMode, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: String::new(),
            login_url: "/login/".to_string(),
            signup_url: "/signup/".to_string(),
            verify_otp_url: "/verify-otp/".to_string(),
            resend_otp_url: "/resend-otp/".to_string(),
            reset_request_url: "/reset-password/".to_string(),
            reset_confirm_url: "/reset-password/".to_string(),
            google_login_url: "/accounts/google/login/".to_string(),
            discord_login_url: "/accounts/discord/login/".to_string(),
            log_level: "info".to_string(),
            initial_mode: AuthMode::Login,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  /accounts/login/ "),
            Some("/accounts/login/".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            login_url: normalize_runtime_value(""),
            resend_otp_url: normalize_runtime_value("  "),
            active_form: normalize_runtime_value(" "),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://portal.example"),
            resend_otp_url: normalize_runtime_value("/auth/resend-otp/"),
            log_level: normalize_runtime_value("debug"),
            active_form: normalize_runtime_value("signup"),
            discord_login_url: normalize_runtime_value(" /social/discord/ "),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://portal.example");
        assert_eq!(config.resend_otp_url, "/auth/resend-otp/");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.initial_mode, AuthMode::Signup);
        assert_eq!(config.discord_login_url, "/social/discord/");
        assert_eq!(config.google_login_url, "/accounts/google/login/");
        assert_eq!(config.login_url, "/login/");
    }

    #[test]
    fn reset_confirm_action_joins_token() {
        let config = defaults();
        assert_eq!(
            config.reset_confirm_action("5f0c-11aa"),
            "/reset-password/5f0c-11aa/"
        );
        assert_eq!(config.reset_confirm_action("/abc/"), "/reset-password/abc/");
    }
}
