//! Motor Command Encoder
//!
//! Translates independent left/right slider positions into the text-based
//! protocol accepted by the vehicle firmware:
//!
//! ```text
//! stop-command     ::= "stop x"
//! move-command     ::= "move " dir-speed " " dir-speed "x"
//! dir-speed        ::= direction-digit magnitude-digits
//! direction-digit  ::= "0" | "1"        ; 0 = forward, 1 = backward
//! magnitude-digits ::= decimal integer in [0, 255], no sign
//! ```
//!
//! There is no per-axis partial update in the protocol: every axis change
//! re-renders and resends the full two-axis move command.

use crate::domain::models::Direction;
use crate::domain::settings::EncoderSettings;
use std::fmt;
use tracing::trace;

/// Largest speed magnitude the wire format can carry.
pub const MAX_MAGNITUDE: i32 = 255;

/// One-shot stop command. Does not touch encoder state.
pub const STOP_COMMAND: &str = "stop x";

/// A motor speed as carried on the wire: an unsigned magnitude plus a
/// direction digit. The magnitude is never negative; the sign lives
/// entirely in [`Direction`], because the protocol has no `-` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignedSpeed {
    pub direction: Direction,
    pub magnitude: u8,
}

impl SignedSpeed {
    /// Both motors start here: magnitude 0, forward.
    pub fn rest() -> Self {
        Self::default()
    }

    /// Split a scaled slider value into direction and magnitude, clamping
    /// to the wire range first so a misconfigured input range can never
    /// produce an out-of-grammar magnitude. Zero always encodes forward.
    pub fn from_scaled(value: i32) -> Self {
        let clamped = value.clamp(-MAX_MAGNITUDE, MAX_MAGNITUDE);
        if clamped < 0 {
            Self {
                direction: Direction::Backward,
                magnitude: clamped.unsigned_abs() as u8,
            }
        } else {
            Self {
                direction: Direction::Forward,
                magnitude: clamped as u8,
            }
        }
    }

    /// Reconstruct the signed value this field encodes.
    pub fn signed(&self) -> i32 {
        match self.direction {
            Direction::Forward => i32::from(self.magnitude),
            Direction::Backward => -i32::from(self.magnitude),
        }
    }
}

/// Renders the `dir-speed` wire field, e.g. `"0119"` or `"1255"`.
impl fmt::Display for SignedSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.digit(), self.magnitude)
    }
}

/// Holds the last-set speed pair and renders protocol commands from it.
///
/// Raw slider values are recentered by subtracting the configured midpoint
/// and scaled by the configured step, so a slider with 2 * midpoint + 1
/// positions covers [-midpoint * step, midpoint * step].
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    settings: EncoderSettings,
    left: SignedSpeed,
    right: SignedSpeed,
}

impl CommandEncoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self {
            settings,
            left: SignedSpeed::rest(),
            right: SignedSpeed::rest(),
        }
    }

    /// Update the left motor from a raw slider position and return the
    /// resulting wire field.
    pub fn set_left(&mut self, raw_progress: i32) -> SignedSpeed {
        self.left = self.scale(raw_progress);
        trace!(raw_progress, field = %self.left, "left axis updated");
        self.left
    }

    /// Update the right motor from a raw slider position and return the
    /// resulting wire field.
    pub fn set_right(&mut self, raw_progress: i32) -> SignedSpeed {
        self.right = self.scale(raw_progress);
        trace!(raw_progress, field = %self.right, "right axis updated");
        self.right
    }

    fn scale(&self, raw_progress: i32) -> SignedSpeed {
        let recentered = raw_progress.saturating_sub(self.settings.midpoint);
        SignedSpeed::from_scaled(recentered.saturating_mul(self.settings.step))
    }

    /// Full two-axis move command from the most recently set fields.
    pub fn render_move(&self) -> String {
        format!("move {} {}x", self.left, self.right)
    }

    /// The stop command. One-shot override: stored speeds are left alone,
    /// so the next slider move resumes from the last values.
    pub fn render_stop(&self) -> &'static str {
        STOP_COMMAND
    }

    pub fn left(&self) -> SignedSpeed {
        self.left
    }

    pub fn right(&self) -> SignedSpeed {
        self.right
    }
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self::new(EncoderSettings::default())
    }
}
