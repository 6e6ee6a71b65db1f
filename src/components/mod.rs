//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod otp_entry;
pub(crate) mod server_messages;
pub(crate) mod social_button;
pub(crate) mod ui;

pub(crate) use layout::AuthCard;
pub(crate) use otp_entry::{OtpEntry, ResendControl};
pub(crate) use server_messages::FlashProvider;
pub(crate) use social_button::SocialSignIn;
pub(crate) use ui::{
    Alert, AlertKind, Button, CsrfField, FormField, FormHandle, Spinner, StrengthMeter,
    VisibilityToggle, blocking_alert, submit_form,
};
