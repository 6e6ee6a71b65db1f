//! Auth feature module: login/signup validation, the active tab, CSRF token
//! lookup, social sign-in buttons, and the resend-code request. Passwords and
//! tokens stay in memory only long enough to validate or send them and are
//! never logged.
//!
//! Flow Overview: login and signup validate locally and post natively. A login
//! that requires a second factor lands on the OTP page, whose resend button
//! calls the server with the CSRF token in a header.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod csrf;
pub(crate) mod forms;
pub(crate) mod mode;
pub(crate) mod social;
