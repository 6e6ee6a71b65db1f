//! Field-level validation primitives shared by the login, signup, and reset
//! forms. A `FieldRule` is pure: evaluating it against the same values always
//! produces the same `ValidationResult`. `FormState` owns an ordered set of rules
//! and remembers the latest verdict per field so views can render inline errors
//! and the submit handler can decide whether to post.
//!
//! Values are never logged; only field identifiers and verdicts are traced.

pub(crate) mod strength;

use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Email shape accepted by both the login identifier and the signup email.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Letters, digits, and underscores only.
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_]+$";

/// Basic email format check on already-trimmed input.
pub fn valid_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|regex| regex.is_match(value))
}

/// Length as the browser reports it (UTF-16 code units), so limits agree with
/// the input's own `length`. Characters outside the BMP count twice.
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Identifies one input across the portal forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    LoginIdentifier,
    LoginPassword,
    SignupUsername,
    SignupEmail,
    SignupPassword,
    SignupConfirmPassword,
    ResetEmail,
    ResetPassword,
    ResetConfirmPassword,
}

impl FieldId {
    /// DOM id of the input rendered for this field.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::LoginIdentifier => "login_username",
            Self::LoginPassword => "login_password",
            Self::SignupUsername => "signup_username",
            Self::SignupEmail => "signup_email",
            Self::SignupPassword => "signup_password",
            Self::SignupConfirmPassword => "signup_confirm_password",
            Self::ResetEmail => "reset_email",
            Self::ResetPassword => "password",
            Self::ResetConfirmPassword => "confirmPassword",
        }
    }

    /// Form field name expected by the server when the form is posted.
    pub fn form_name(self) -> &'static str {
        match self {
            Self::LoginIdentifier | Self::SignupUsername => "username",
            Self::LoginPassword | Self::SignupPassword | Self::ResetPassword => "password",
            Self::SignupEmail | Self::ResetEmail => "email",
            Self::SignupConfirmPassword | Self::ResetConfirmPassword => "confirm_password",
        }
    }
}

/// Outcome of evaluating one rule. The message exists only for failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Current raw input of every field in a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<FieldId, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value, or an empty string for a field that was never touched.
    pub fn get(&self, field: FieldId) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }
}

/// Extra check that may look at sibling fields. Returns the failure message.
pub type Predicate = fn(&str, &FieldValues) -> Result<(), &'static str>;

/// One validation rule bound to one field. Checks run in a fixed order:
/// required, minimum length, maximum length, pattern, then predicates.
#[derive(Clone, Debug)]
pub struct FieldRule {
    field: FieldId,
    required: Option<&'static str>,
    min_length: Option<(usize, &'static str)>,
    max_length: Option<(usize, &'static str)>,
    pattern: Option<(&'static str, &'static str)>,
    predicates: Vec<Predicate>,
    trim: bool,
    cascade: Option<FieldId>,
}

impl FieldRule {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            required: None,
            min_length: None,
            max_length: None,
            pattern: None,
            predicates: Vec::new(),
            trim: true,
            cascade: None,
        }
    }

    #[must_use]
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    #[must_use]
    pub fn min_length(mut self, length: usize, message: &'static str) -> Self {
        self.min_length = Some((length, message));
        self
    }

    #[must_use]
    pub fn max_length(mut self, length: usize, message: &'static str) -> Self {
        self.max_length = Some((length, message));
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: &'static str, message: &'static str) -> Self {
        self.pattern = Some((pattern, message));
        self
    }

    #[must_use]
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Compare the raw value instead of the trimmed one after the required check.
    #[must_use]
    pub fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }

    /// Re-validate `field` whenever this rule passes and `field` already has input.
    #[must_use]
    pub fn cascade(mut self, field: FieldId) -> Self {
        self.cascade = Some(field);
        self
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Evaluates the rule against the current form values.
    pub fn evaluate(&self, values: &FieldValues) -> ValidationResult {
        let raw = values.get(self.field);
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return match self.required {
                Some(message) => ValidationResult::invalid(message),
                None => ValidationResult::Valid,
            };
        }

        let value = if self.trim { trimmed } else { raw };
        let length = input_length(value);

        if let Some((min, message)) = self.min_length {
            if length < min {
                return ValidationResult::invalid(message);
            }
        }

        if let Some((max, message)) = self.max_length {
            if length > max {
                return ValidationResult::invalid(message);
            }
        }

        if let Some((pattern, message)) = self.pattern {
            if !Regex::new(pattern).is_ok_and(|regex| regex.is_match(value)) {
                return ValidationResult::invalid(message);
            }
        }

        for predicate in &self.predicates {
            if let Err(message) = predicate(value, values) {
                return ValidationResult::invalid(message);
            }
        }

        ValidationResult::Valid
    }
}

/// Ordered rules with the latest verdict per field.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    rules: Vec<FieldRule>,
    results: BTreeMap<FieldId, ValidationResult>,
}

impl FormState {
    /// Builds a form from its rules. A later rule for the same field replaces
    /// the earlier one so field keys stay unique.
    pub fn new(rules: impl IntoIterator<Item = FieldRule>) -> Self {
        let mut state = Self::default();
        for rule in rules {
            match state.rules.iter_mut().find(|r| r.field() == rule.field()) {
                Some(existing) => *existing = rule,
                None => state.rules.push(rule),
            }
        }
        state
    }

    pub fn result(&self, field: FieldId) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    /// Validates one field and any field it cascades into. Returns the verdict
    /// for `field`, or `Valid` when the form has no rule for it.
    pub fn validate_field(&mut self, field: FieldId, values: &FieldValues) -> ValidationResult {
        let Some(rule) = self.rules.iter().find(|rule| rule.field() == field) else {
            return ValidationResult::Valid;
        };

        let result = rule.evaluate(values);
        let cascade = rule.cascade;
        if let Some(message) = result.message() {
            debug!(field = ?field, reason = message, "field failed validation");
        }
        self.results.insert(field, result.clone());

        if let Some(target) = cascade {
            if result.is_valid() && !values.get(target).is_empty() {
                self.validate_field(target, values);
            }
        }

        result
    }

    /// Evaluates every rule without short-circuiting so each field shows its
    /// own verdict. Returns true when all rules pass.
    pub fn validate_all(&mut self, values: &FieldValues) -> bool {
        let mut all_valid = true;
        for rule in &self.rules {
            let result = rule.evaluate(values);
            all_valid &= result.is_valid();
            self.results.insert(rule.field(), result);
        }
        all_valid
    }

    /// True only when every rule has been evaluated and passed.
    pub fn is_submittable(&self) -> bool {
        self.rules.iter().all(|rule| {
            self.results
                .get(&rule.field())
                .is_some_and(ValidationResult::is_valid)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username_rule() -> FieldRule {
        FieldRule::new(FieldId::SignupUsername)
            .required("required")
            .min_length(3, "too short")
            .max_length(5, "too long")
            .pattern(USERNAME_PATTERN, "bad chars")
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@b.co"));
        assert!(valid_email("name.surname@example.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("a b@c.de"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a@@b.co"));
    }

    #[test]
    fn rule_checks_run_in_order() {
        let rule = username_rule();
        let eval = |value: &str| {
            rule.evaluate(&FieldValues::new().with(FieldId::SignupUsername, value))
        };

        assert_eq!(eval("   "), ValidationResult::invalid("required"));
        assert_eq!(eval("a!"), ValidationResult::invalid("too short"));
        assert_eq!(eval("abcdef"), ValidationResult::invalid("too long"));
        assert_eq!(eval("ab!c"), ValidationResult::invalid("bad chars"));
        assert_eq!(eval("  ab_c "), ValidationResult::Valid);
    }

    #[test]
    fn optional_field_passes_when_empty() {
        let rule = FieldRule::new(FieldId::SignupEmail).pattern(EMAIL_PATTERN, "bad");
        assert!(rule.evaluate(&FieldValues::new()).is_valid());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rule = FieldRule::new(FieldId::SignupUsername).max_length(3, "too long");
        let values = FieldValues::new().with(FieldId::SignupUsername, "äöü");
        assert!(rule.evaluate(&values).is_valid());
    }

    #[test]
    fn untrimmed_rule_sees_surrounding_whitespace() {
        fn no_spaces(value: &str, _: &FieldValues) -> Result<(), &'static str> {
            if value.contains(' ') { Err("space") } else { Ok(()) }
        }
        let values = FieldValues::new().with(FieldId::SignupPassword, " abc ");

        let trimmed = FieldRule::new(FieldId::SignupPassword).predicate(no_spaces);
        assert!(trimmed.evaluate(&values).is_valid());

        let raw = FieldRule::new(FieldId::SignupPassword)
            .predicate(no_spaces)
            .untrimmed();
        assert_eq!(raw.evaluate(&values), ValidationResult::invalid("space"));
    }

    #[test]
    fn form_state_keeps_field_keys_unique() {
        let state = FormState::new([
            FieldRule::new(FieldId::SignupUsername).required("first"),
            FieldRule::new(FieldId::SignupEmail),
            FieldRule::new(FieldId::SignupUsername).required("second"),
        ]);

        let mut state = state;
        let values = FieldValues::new().with(FieldId::SignupEmail, "a@b.co");
        assert!(!state.validate_all(&values));
        assert_eq!(
            state.result(FieldId::SignupUsername),
            Some(&ValidationResult::invalid("second"))
        );
        assert!(state.result(FieldId::SignupEmail).is_some_and(ValidationResult::is_valid));
    }

    #[test]
    fn validate_all_records_every_field() {
        let mut state = FormState::new([
            username_rule(),
            FieldRule::new(FieldId::SignupEmail).required("email required"),
        ]);
        let values = FieldValues::new().with(FieldId::SignupUsername, "abc");

        assert!(!state.validate_all(&values));
        assert!(state.result(FieldId::SignupUsername).is_some_and(ValidationResult::is_valid));
        assert_eq!(
            state.result(FieldId::SignupEmail).and_then(ValidationResult::message),
            Some("email required")
        );
        assert!(!state.is_submittable());
    }

    #[test]
    fn is_submittable_requires_every_field_evaluated() {
        let mut state = FormState::new([
            FieldRule::new(FieldId::LoginIdentifier).required("a"),
            FieldRule::new(FieldId::LoginPassword).required("b"),
        ]);
        let values = FieldValues::new()
            .with(FieldId::LoginIdentifier, "user")
            .with(FieldId::LoginPassword, "secret");

        state.validate_field(FieldId::LoginIdentifier, &values);
        assert!(!state.is_submittable());

        state.validate_field(FieldId::LoginPassword, &values);
        assert!(state.is_submittable());
    }

    #[test]
    fn cascade_revalidates_filled_target_only() {
        fn never(_: &str, _: &FieldValues) -> Result<(), &'static str> {
            Err("mismatch")
        }
        let mut state = FormState::new([
            FieldRule::new(FieldId::SignupPassword)
                .required("pw")
                .cascade(FieldId::SignupConfirmPassword),
            FieldRule::new(FieldId::SignupConfirmPassword)
                .required("confirm")
                .predicate(never),
        ]);

        let values = FieldValues::new().with(FieldId::SignupPassword, "secret");
        state.validate_field(FieldId::SignupPassword, &values);
        assert!(state.result(FieldId::SignupConfirmPassword).is_none());

        let values = values.with(FieldId::SignupConfirmPassword, "other");
        state.validate_field(FieldId::SignupPassword, &values);
        assert_eq!(
            state
                .result(FieldId::SignupConfirmPassword)
                .and_then(ValidationResult::message),
            Some("mismatch")
        );
    }

    #[test]
    fn unknown_field_is_treated_as_valid() {
        let mut state = FormState::new([FieldRule::new(FieldId::LoginPassword).required("x")]);
        let result = state.validate_field(FieldId::ResetEmail, &FieldValues::new());
        assert!(result.is_valid());
        assert!(state.result(FieldId::ResetEmail).is_none());
    }

    #[test]
    fn lengths_count_utf16_units() {
        assert_eq!(input_length("abc"), 3);
        assert_eq!(input_length("é"), 1);
        assert_eq!(input_length("😀"), 2);

        let rule = FieldRule::new(FieldId::SignupUsername).min_length(3, "short");
        let values = FieldValues::new().with(FieldId::SignupUsername, "a😀");
        assert!(rule.evaluate(&values).is_valid());
    }
}
