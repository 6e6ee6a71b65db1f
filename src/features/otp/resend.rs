//! Resend cooldown for the OTP page.
//!
//! ```text
//! Cooling(60) --tick x60--> Ready --request--> Sending --ok--> Sent --2s--> Cooling(60)
//!                                      ^                \--err--> Failed
//!                                      \---------request----------/
//! ```
//!
//! The view owns the actual interval and timeout handles; this type only says
//! when they should run.

use tracing::{debug, info, warn};

/// Seconds the resend control stays disabled after a code is issued.
pub const RESEND_COOLDOWN_SECS: u32 = 60;
/// How long "Code Sent!" stays visible before the next cooldown starts.
pub const SENT_DWELL_MS: u32 = 2_000;
/// Countdown tick interval.
pub const TICK_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResendPhase {
    Cooling { remaining: u32 },
    Ready,
    Sending,
    Sent,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendTimer {
    phase: ResendPhase,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendTimer {
    /// A fresh widget starts cooling down, since a code was just sent.
    pub fn new() -> Self {
        Self {
            phase: ResendPhase::Cooling {
                remaining: RESEND_COOLDOWN_SECS,
            },
        }
    }

    pub fn phase(&self) -> ResendPhase {
        self.phase
    }

    pub fn is_cooling(&self) -> bool {
        matches!(self.phase, ResendPhase::Cooling { .. })
    }

    /// One second elapsed. Returns true when the interval driving the
    /// countdown should be cancelled.
    pub fn tick(&mut self) -> bool {
        let ResendPhase::Cooling { remaining } = self.phase else {
            return true;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            debug!("resend cooldown finished");
            self.phase = ResendPhase::Ready;
            true
        } else {
            self.phase = ResendPhase::Cooling { remaining };
            false
        }
    }

    /// The user pressed resend. Returns whether a request should be sent.
    pub fn request(&mut self) -> bool {
        if !self.resend_enabled() {
            return false;
        }
        info!("requesting a new verification code");
        self.phase = ResendPhase::Sending;
        true
    }

    /// The resend request completed. Completions outside `Sending` are ignored.
    pub fn complete(&mut self, succeeded: bool) {
        if self.phase != ResendPhase::Sending {
            return;
        }
        self.phase = if succeeded {
            ResendPhase::Sent
        } else {
            warn!("resend request failed");
            ResendPhase::Failed
        };
    }

    /// The "Code Sent!" dwell elapsed. Returns true when a new cooldown began
    /// and the caller should start ticking.
    pub fn dwell_elapsed(&mut self) -> bool {
        if self.phase != ResendPhase::Sent {
            return false;
        }
        *self = Self::new();
        true
    }

    pub fn resend_enabled(&self) -> bool {
        matches!(self.phase, ResendPhase::Ready | ResendPhase::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            ResendPhase::Cooling { .. } | ResendPhase::Ready => "Resend Code",
            ResendPhase::Sending => "Sending...",
            ResendPhase::Sent => "Code Sent!",
            ResendPhase::Failed => "Failed",
        }
    }

    /// Countdown shown beside the control, empty unless cooling.
    pub fn countdown_text(&self) -> String {
        match self.phase {
            ResendPhase::Cooling { remaining } => format!("({remaining}s)"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> ResendTimer {
        let mut timer = ResendTimer::new();
        while !timer.tick() {}
        timer
    }

    #[test]
    fn starts_cooling_with_full_countdown() {
        let timer = ResendTimer::new();
        assert_eq!(
            timer.phase(),
            ResendPhase::Cooling {
                remaining: RESEND_COOLDOWN_SECS
            }
        );
        assert!(!timer.resend_enabled());
        assert_eq!(timer.countdown_text(), "(60s)");
        assert_eq!(timer.label(), "Resend Code");
    }

    #[test]
    fn sixty_ticks_reach_ready() {
        let mut timer = ResendTimer::new();
        for tick in 1..RESEND_COOLDOWN_SECS {
            assert!(!timer.tick(), "stopped early at tick {tick}");
            assert!(!timer.resend_enabled());
        }
        assert_eq!(timer.countdown_text(), "(1s)");
        assert!(timer.tick());
        assert_eq!(timer.phase(), ResendPhase::Ready);
        assert!(timer.resend_enabled());
        assert_eq!(timer.countdown_text(), "");
    }

    #[test]
    fn stray_tick_after_ready_stops_interval() {
        let mut timer = ready();
        assert!(timer.tick());
        assert_eq!(timer.phase(), ResendPhase::Ready);
    }

    #[test]
    fn request_is_refused_while_cooling() {
        let mut timer = ResendTimer::new();
        timer.tick();
        assert!(!timer.request());
        assert!(timer.is_cooling());
    }

    #[test]
    fn successful_resend_dwells_then_cools_again() {
        let mut timer = ready();
        assert!(timer.request());
        assert_eq!(timer.label(), "Sending...");
        assert!(!timer.resend_enabled());
        assert!(!timer.request());

        timer.complete(true);
        assert_eq!(timer.label(), "Code Sent!");
        assert!(!timer.resend_enabled());

        assert!(timer.dwell_elapsed());
        assert_eq!(timer, ResendTimer::new());
        assert!(!timer.dwell_elapsed());
    }

    #[test]
    fn failed_resend_allows_immediate_retry() {
        let mut timer = ready();
        assert!(timer.request());
        timer.complete(false);
        assert_eq!(timer.phase(), ResendPhase::Failed);
        assert_eq!(timer.label(), "Failed");
        assert!(timer.resend_enabled());
        assert_eq!(timer.countdown_text(), "");
        assert!(!timer.dwell_elapsed());

        assert!(timer.request());
        assert_eq!(timer.phase(), ResendPhase::Sending);
    }

    #[test]
    fn late_completion_is_ignored() {
        let mut timer = ResendTimer::new();
        timer.complete(true);
        assert!(timer.is_cooling());
    }
}
