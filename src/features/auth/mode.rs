//! Tab selection between the login and signup forms on the join page.

use std::str::FromStr;

/// Exactly one auth form is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Join Roblox",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Sign in to continue your adventure",
            Self::Signup => "Create an account to start building",
        }
    }

    /// Value of the tab's `data-tab` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    /// Resolves the host page's active-form marker, defaulting to login.
    pub fn from_marker(marker: Option<&str>) -> Self {
        marker
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for AuthMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "login" | "signin" => Ok(Self::Login),
            "signup" | "register" => Ok(Self::Signup),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuthMode;

    #[test]
    fn marker_defaults_to_login() {
        assert_eq!(AuthMode::from_marker(None), AuthMode::Login);
        assert_eq!(AuthMode::from_marker(Some("")), AuthMode::Login);
        assert_eq!(AuthMode::from_marker(Some("unknown")), AuthMode::Login);
        assert_eq!(AuthMode::from_marker(Some(" Signup ")), AuthMode::Signup);
    }

    #[test]
    fn headings_follow_mode() {
        assert_eq!(AuthMode::Login.heading(), "Welcome Back");
        assert_eq!(AuthMode::Signup.heading(), "Join Roblox");
        assert_eq!(
            AuthMode::Signup.subheading(),
            "Create an account to start building"
        );
        assert_eq!(AuthMode::Login.as_str(), "login");
    }
}
