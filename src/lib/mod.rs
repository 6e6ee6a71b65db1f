//! Shared frontend utilities for configuration, errors, logging, HTTP, and
//! build metadata.
//!
//! ## Portal Flows
//!
//! ### Login & Signup
//!
//! Both forms validate in the browser and then submit as ordinary form posts
//! to the server routes named in `AppConfig`. The server owns sessions, CSRF
//! issuance, and the second factor.
//!
//! ### One-time Code
//!
//! After a password login the server redirects to the OTP page. The code is
//! posted natively; only the resend action uses `fetch`, carrying the CSRF
//! token in `X-CSRFToken`.
//!
//! Centralizing these helpers keeps network behavior consistent. Callers must
//! avoid logging passwords, codes, or tokens.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_empty_with_headers_with_credentials;
pub(crate) use errors::AppError;
