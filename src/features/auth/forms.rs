//! Login and signup validators. Each validator owns the `FormState` for one
//! form and turns blur, keystroke, and submit events into verdicts. The view
//! decides how to render them; nothing here touches the DOM.
//!
//! Flow Overview: every keystroke and blur validates the touched field, the
//! signup password also re-checks a filled confirmation, and submit evaluates
//! every field before deciding whether the native post may proceed.

use crate::features::validation::{
    EMAIL_PATTERN, FieldId, FieldRule, FieldValues, FormState, USERNAME_PATTERN,
    ValidationResult, input_length, strength::PasswordStrength, valid_email,
};
use tracing::{debug, info};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Shown as a blocking alert rather than an inline error.
pub const TERMS_REQUIRED_MESSAGE: &str = "You must agree to the Terms of Service";

/// Which form a validator guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

/// What the submit handler should do with the native form post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Every rule passed; disable the button and post.
    Proceed,
    /// At least one field failed; inline messages are already recorded.
    Rejected,
    /// A precondition failed that must interrupt the user with an alert.
    Blocked(&'static str),
}

fn identifier_shape(value: &str, _: &FieldValues) -> Result<(), &'static str> {
    if value.contains('@') && !valid_email(value) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

fn not_weak(value: &str, _: &FieldValues) -> Result<(), &'static str> {
    if PasswordStrength::classify(value) == PasswordStrength::Weak {
        return Err("Password is too weak. Add uppercase, numbers, or symbols");
    }
    Ok(())
}

fn matches_password(value: &str, values: &FieldValues) -> Result<(), &'static str> {
    if value != values.get(FieldId::SignupPassword) {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Rules for the login form.
pub fn login_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(FieldId::LoginIdentifier)
            .required("Username or email is required")
            .predicate(identifier_shape),
        FieldRule::new(FieldId::LoginPassword).required("Password is required"),
    ]
}

/// Rules for the signup form. Terms agreement is checked separately at submit.
pub fn signup_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(FieldId::SignupUsername)
            .required("Username is required")
            .min_length(
                USERNAME_MIN_LENGTH,
                "Username must be at least 3 characters",
            )
            .max_length(
                USERNAME_MAX_LENGTH,
                "Username must be less than 20 characters",
            )
            .pattern(
                USERNAME_PATTERN,
                "Username can only contain letters, numbers, and underscores",
            ),
        FieldRule::new(FieldId::SignupEmail)
            .required("Email is required")
            .pattern(EMAIL_PATTERN, "Please enter a valid email address"),
        FieldRule::new(FieldId::SignupPassword)
            .required("Password is required")
            .min_length(
                PASSWORD_MIN_LENGTH,
                "Password must be at least 8 characters",
            )
            .predicate(not_weak)
            .cascade(FieldId::SignupConfirmPassword),
        FieldRule::new(FieldId::SignupConfirmPassword)
            .required("Please confirm your password")
            .predicate(matches_password)
            .untrimmed(),
    ]
}

/// Validation state for one login or signup form instance.
#[derive(Clone, Debug)]
pub struct FormValidator {
    kind: FormKind,
    state: FormState,
    submitting: bool,
}

impl FormValidator {
    pub fn login() -> Self {
        Self {
            kind: FormKind::Login,
            state: FormState::new(login_rules()),
            submitting: false,
        }
    }

    pub fn signup() -> Self {
        Self {
            kind: FormKind::Signup,
            state: FormState::new(signup_rules()),
            submitting: false,
        }
    }

    /// Latest verdict for `field`, `None` until the field is first validated.
    pub fn result(&self, field: FieldId) -> Option<&ValidationResult> {
        self.state.result(field)
    }

    /// Focus left the field.
    pub fn on_blur(&mut self, field: FieldId, values: &FieldValues) -> ValidationResult {
        self.state.validate_field(field, values)
    }

    /// The field changed. Callers also dismiss stale server banners.
    pub fn on_input(&mut self, field: FieldId, values: &FieldValues) -> ValidationResult {
        self.state.validate_field(field, values)
    }

    /// Evaluates every field, then the terms checkbox for signup.
    pub fn on_submit(&mut self, values: &FieldValues, agreed_to_terms: bool) -> SubmitDecision {
        if self.submitting {
            return SubmitDecision::Rejected;
        }

        self.state.validate_all(values);
        let fields_valid = self.state.is_submittable();
        if self.kind == FormKind::Signup && !agreed_to_terms {
            debug!("signup blocked until terms are accepted");
            return SubmitDecision::Blocked(TERMS_REQUIRED_MESSAGE);
        }
        if !fields_valid {
            debug!(form = ?self.kind, "submit rejected by validation");
            return SubmitDecision::Rejected;
        }

        self.submitting = true;
        info!(form = ?self.kind, "form passed validation, submitting");
        SubmitDecision::Proceed
    }

    /// True once a submit has been allowed; the button stays disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Label the submit button shows while the native post is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self.kind {
            FormKind::Login => "Signing In...",
            FormKind::Signup => "Creating Account...",
        }
    }

    pub fn idle_label(&self) -> &'static str {
        match self.kind {
            FormKind::Login => "Sign In",
            FormKind::Signup => "Create Account",
        }
    }
}

/// Gate for the password reset confirmation. The error is shown as an alert.
pub fn reset_submission(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match!");
    }
    if input_length(password) < PASSWORD_MIN_LENGTH {
        return Err("Password must be at least 8 characters!");
    }
    Ok(())
}
