//! One-time-password entry: six single-digit slots kept in sync with a joined
//! value that is posted to the server. Handlers return the slot that should
//! receive focus so the view can move the caret without owning any logic.
//!
//! Digits are never logged.

pub(crate) mod resend;

/// Number of digit slots in the code.
pub const OTP_LENGTH: usize = 6;

/// Result of an `input` event on one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotInput {
    /// A digit was stored; focus moves to `focus` when present.
    Accepted { focus: Option<usize> },
    /// The slot was emptied.
    Cleared,
    /// The character was not a digit; nothing changed.
    Rejected,
}

/// Slot contents. Each slot holds nothing or one ASCII digit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpState {
    slots: [Option<char>; OTP_LENGTH],
    submitting: bool,
}

impl OtpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text rendered in slot `index`.
    pub fn slot(&self, index: usize) -> String {
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    /// Applies the raw value of slot `index` after an input event. Only the
    /// first character is considered.
    pub fn input(&mut self, index: usize, raw: &str) -> SlotInput {
        let Some(slot) = self.slots.get_mut(index) else {
            return SlotInput::Rejected;
        };

        match raw.chars().next() {
            None => {
                *slot = None;
                SlotInput::Cleared
            }
            Some(digit) if digit.is_ascii_digit() => {
                *slot = Some(digit);
                let next = index + 1;
                SlotInput::Accepted {
                    focus: (next < OTP_LENGTH).then_some(next),
                }
            }
            Some(_) => SlotInput::Rejected,
        }
    }

    /// `Backspace` pressed in slot `index`. Returns the previous slot when the
    /// current one is already empty.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        let empty = self.slots.get(index).is_some_and(Option::is_none);
        (empty && index > 0).then(|| index - 1)
    }

    /// Distributes a pasted code. Non-digits are stripped first; anything other
    /// than exactly six digits is ignored. Returns the slot to focus on success.
    pub fn paste(&mut self, text: &str) -> Option<usize> {
        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != OTP_LENGTH {
            return None;
        }

        for (slot, digit) in self.slots.iter_mut().zip(digits) {
            *slot = Some(digit);
        }
        Some(OTP_LENGTH - 1)
    }

    /// Concatenation of the filled slots in order.
    pub fn joined(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The verify button is enabled exactly when the code is complete and no
    /// submit is already in flight.
    pub fn submit_enabled(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Marks the form as submitting when the code is complete. Returns whether
    /// the native post may proceed.
    pub fn begin_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Drops the entered digits once a fresh code has been issued. Ignored
    /// while a submit is in flight. Returns whether the slots were cleared.
    pub fn clear(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> OtpState {
        let mut state = OtpState::new();
        for (index, digit) in code.chars().enumerate() {
            state.input(index, &digit.to_string());
        }
        state
    }

    #[test]
    fn digit_advances_focus_until_last_slot() {
        let mut state = OtpState::new();
        assert_eq!(state.input(0, "4"), SlotInput::Accepted { focus: Some(1) });
        assert_eq!(state.input(5, "9"), SlotInput::Accepted { focus: None });
        assert_eq!(state.joined(), "49");
    }

    #[test]
    fn input_is_truncated_to_first_character() {
        let mut state = OtpState::new();
        assert_eq!(state.input(2, "71"), SlotInput::Accepted { focus: Some(3) });
        assert_eq!(state.slot(2), "7");
        assert_eq!(state.input(3, "x1"), SlotInput::Rejected);
        assert_eq!(state.slot(3), "");
    }

    #[test]
    fn non_digits_leave_state_unchanged() {
        let mut state = filled("12");
        let before = state.clone();
        for raw in ["a", " ", "-", "٣", "½"] {
            assert_eq!(state.input(1, raw), SlotInput::Rejected);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn empty_input_clears_slot() {
        let mut state = filled("123");
        assert_eq!(state.input(1, ""), SlotInput::Cleared);
        assert_eq!(state.joined(), "13");
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut state = OtpState::new();
        assert_eq!(state.input(OTP_LENGTH, "1"), SlotInput::Rejected);
        assert_eq!(state.slot(OTP_LENGTH), "");
    }

    #[test]
    fn backspace_moves_back_only_from_empty_slot() {
        let state = filled("12");
        assert_eq!(state.backspace(0), None);
        assert_eq!(state.backspace(1), None);
        assert_eq!(state.backspace(2), Some(1));
        assert_eq!(state.backspace(5), Some(4));
        assert_eq!(OtpState::new().backspace(0), None);
    }

    #[test]
    fn six_digit_paste_fills_every_slot() {
        let mut state = OtpState::new();
        assert_eq!(state.paste("12-34 56"), Some(5));
        assert_eq!(state.joined(), "123456");
        assert!(state.submit_enabled());

        let mut state = filled("9");
        assert_eq!(state.paste("654321"), Some(5));
        assert_eq!(state.slot(0), "6");
    }

    #[test]
    fn other_pastes_change_nothing() {
        for text in ["", "12345", "1234567", "abcdef", "12 34 5", "١٢٣٤٥٦"] {
            let mut state = filled("98");
            let before = state.clone();
            assert_eq!(state.paste(text), None, "{text}");
            assert_eq!(state, before);
        }
    }

    #[test]
    fn joined_length_tracks_filled_slots() {
        let mut state = OtpState::new();
        state.input(0, "1");
        state.input(3, "4");
        assert_eq!(state.joined(), "14");
        assert!(!state.is_complete());
    }

    #[test]
    fn submit_enabled_iff_six_digits() {
        let mut state = OtpState::new();
        let steps: [(usize, &str); 9] = [
            (0, "1"),
            (1, "2"),
            (2, "3"),
            (3, "4"),
            (4, "5"),
            (5, "6"),
            (2, ""),
            (2, "a"),
            (2, "0"),
        ];
        for (index, raw) in steps {
            state.input(index, raw);
            assert_eq!(state.submit_enabled(), state.joined().len() == OTP_LENGTH);
        }
        assert_eq!(state.joined(), "120456");
    }

    #[test]
    fn begin_submit_gates_on_completion() {
        let mut state = filled("12345");
        assert!(!state.begin_submit());
        assert!(!state.is_submitting());

        state.input(5, "6");
        assert!(state.begin_submit());
        assert!(state.is_submitting());
        assert!(!state.submit_enabled());
        assert!(!state.begin_submit());

        assert!(!state.clear());
        assert_eq!(state.joined(), "123456");
    }

    #[test]
    fn clear_drops_stale_digits() {
        let mut state = filled("1234");
        assert!(state.clear());
        assert_eq!(state, OtpState::new());
        assert_eq!(state.joined(), "");
        assert!(!state.submit_enabled());
    }
}
