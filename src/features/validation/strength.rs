//! Password strength scoring.
//!
//! Signup uses a five-point tally where long passwords earn two points:
//!
//! | criterion                            | points |
//! |--------------------------------------|--------|
//! | length >= 8                          | 1      |
//! | length >= 12                         | 1      |
//! | both a lowercase and uppercase letter| 1      |
//! | a digit                              | 1      |
//! | a character that is not `[a-zA-Z0-9]`| 1      |
//!
//! A score of 2 or less is weak, exactly 3 is medium, 4 or more is strong.
//!
//! The reset page shows a checklist instead, scoring one point per met
//! requirement, where only a full checklist counts as strong.

use super::input_length;

/// Coarse strength class shown next to password inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Signup tally for `password`, from 0 to 5.
    pub fn score(password: &str) -> u8 {
        let length = input_length(password);
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

        [
            length >= 8,
            length >= 12,
            has_lower && has_upper,
            has_digit,
            has_symbol,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }

    /// Classifies `password` with the signup tally.
    pub fn classify(password: &str) -> Self {
        match Self::score(password) {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Strength shown on the signup meter. Passwords below the minimum length
    /// are rejected before strength is consulted, so the meter never rates
    /// them above weak.
    pub fn effective(password: &str) -> Self {
        if input_length(password) < 8 {
            Self::Weak
        } else {
            Self::classify(password)
        }
    }

    /// CSS class applied to the strength meter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium password",
            Self::Strong => "Strong password",
        }
    }
}

/// Requirement checklist rendered on the password reset page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl ResetRequirements {
    pub fn check(password: &str) -> Self {
        Self {
            length: input_length(password) >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn met(&self) -> u8 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.met() {
            0..=2 => PasswordStrength::Weak,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_never_above_weak() {
        for password in ["", "a", "Ab1!", "Ab1!xyz", "ZZ99!!a"] {
            assert!(input_length(password) < 8);
            assert_eq!(PasswordStrength::effective(password), PasswordStrength::Weak);
        }
    }

    #[test]
    fn effective_matches_classify_from_minimum_length() {
        assert_eq!(PasswordStrength::classify("Ab1!xyz"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::effective("Ab1!xyz"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::effective("Ab1!xyzw"), PasswordStrength::Strong);
    }

    #[test]
    fn score_counts_each_criterion_once() {
        assert_eq!(PasswordStrength::score("password"), 1);
        assert_eq!(PasswordStrength::score("passwordpassword"), 2);
        assert_eq!(PasswordStrength::score("Str0ng!Pass99"), 5);
        assert_eq!(PasswordStrength::score("aB"), 1);
        assert_eq!(PasswordStrength::score("!!!!"), 1);
        assert_eq!(PasswordStrength::score("1234"), 1);
    }

    #[test]
    fn three_points_is_medium() {
        for password in ["Abcdefg1", "abcdefgh1!", "abcdefghijk1", "ABCDEFGHIJ!!"] {
            assert_eq!(PasswordStrength::score(password), 3, "{password}");
            assert_eq!(PasswordStrength::classify(password), PasswordStrength::Medium);
        }
    }

    #[test]
    fn breakpoints_match_table() {
        assert_eq!(PasswordStrength::classify("password"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("password12"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("Password12"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::classify("Password12!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify("Str0ng!Pass99"), PasswordStrength::Strong);
    }

    #[test]
    fn astral_characters_count_twice_toward_length() {
        assert_eq!(PasswordStrength::score("😀😀😀😀"), 2);
        assert!(!ResetRequirements::check("Ab1😀😀").length);
        assert!(ResetRequirements::check("Ab1!😀😀").length);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(PasswordStrength::score("é"), 1);
    }

    #[test]
    fn reset_checklist_scores_per_requirement() {
        let requirements = ResetRequirements::check("abc");
        assert_eq!(requirements.met(), 1);
        assert!(requirements.lowercase);
        assert_eq!(requirements.strength(), PasswordStrength::Weak);

        let requirements = ResetRequirements::check("Abcdefgh1");
        assert_eq!(requirements.met(), 4);
        assert_eq!(requirements.strength(), PasswordStrength::Medium);

        let requirements = ResetRequirements::check("Abcdefgh1!");
        assert_eq!(
            requirements,
            ResetRequirements {
                length: true,
                uppercase: true,
                lowercase: true,
                number: true,
                special: true,
            }
        );
        assert_eq!(requirements.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn labels_follow_class() {
        assert_eq!(PasswordStrength::Weak.as_str(), "weak");
        assert_eq!(PasswordStrength::Strong.label(), "Strong password");
    }
}
