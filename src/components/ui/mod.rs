mod alert;
mod button;
mod csrf_field;
mod field;
mod spinner;
mod strength_meter;

pub(crate) use alert::{Alert, AlertKind, blocking_alert};
pub(crate) use button::Button;
pub(crate) use csrf_field::{CsrfField, submit_form};
pub(crate) use field::{FormField, FormHandle, VisibilityToggle};
pub(crate) use spinner::Spinner;
pub(crate) use strength_meter::StrengthMeter;
