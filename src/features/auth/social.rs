//! Third-party sign-in buttons. Pressing one navigates the whole page to the
//! provider's login route on the server; if the page is still here after a
//! short delay the button is restored so the user can try again.

use crate::app_lib::config::AppConfig;
use tracing::debug;

/// Label shown while the browser is leaving for the provider.
pub const CONNECTING_LABEL: &str = "Connecting...";
/// Delay before a button that did not navigate away is re-enabled.
pub const REDIRECT_FALLBACK_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Discord,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Discord];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Discord => "discord",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Discord => "Discord",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Google => "fab fa-google",
            Self::Discord => "fab fa-discord",
        }
    }

    /// Server route that starts this provider's sign-in.
    pub fn login_url(self, config: &AppConfig) -> &str {
        match self {
            Self::Google => &config.google_login_url,
            Self::Discord => &config.discord_login_url,
        }
    }
}

/// Whether a social button is waiting on the redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SocialButtonState {
    #[default]
    Idle,
    Connecting,
}

impl SocialButtonState {
    /// Returns true when this press should start the redirect.
    pub fn press(&mut self) -> bool {
        if *self == Self::Connecting {
            return false;
        }
        *self = Self::Connecting;
        true
    }

    /// The fallback delay elapsed without leaving the page.
    pub fn restore(&mut self) -> bool {
        if *self != Self::Connecting {
            return false;
        }
        debug!("provider redirect did not happen, restoring button");
        *self = Self::Idle;
        true
    }

    pub fn is_connecting(self) -> bool {
        self == Self::Connecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_locks_until_restored() {
        let mut state = SocialButtonState::default();
        assert!(state.press());
        assert!(state.is_connecting());
        assert!(!state.press());

        assert!(state.restore());
        assert!(!state.is_connecting());
        assert!(!state.restore());
        assert!(state.press());
    }

    #[test]
    fn providers_use_configured_routes() {
        let mut config = AppConfig::load();
        config.google_login_url = "/oauth/google/".to_string();
        config.discord_login_url = "/oauth/discord/".to_string();

        assert_eq!(SocialProvider::Google.login_url(&config), "/oauth/google/");
        assert_eq!(SocialProvider::Discord.login_url(&config), "/oauth/discord/");
        assert_eq!(SocialProvider::Discord.icon(), "fab fa-discord");
    }
}
