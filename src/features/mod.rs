//! Portal features and their shared logic. Everything here is plain Rust that
//! compiles on every target; routes and components wire it to the DOM.

pub(crate) mod auth;
pub(crate) mod flash;
pub(crate) mod otp;
pub(crate) mod validation;
