use serde::{Deserialize, Serialize};

/// Which motor a slider input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

/// Motor rotation direction as carried on the wire.
///
/// The protocol has no sign character; the direction digit is the only
/// place a negative speed shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Wire digit for this direction (`0` forward, `1` backward).
    pub fn digit(self) -> char {
        match self {
            Self::Forward => '0',
            Self::Backward => '1',
        }
    }
}

/// Observable state of the session to the remote peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    /// Transient: emitted when an attempt or an established link fails,
    /// always followed by `Disconnected`.
    Failed,
}

/// Input delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// A slider moved; `raw_progress` is in the control's native range.
    Slider { axis: Axis, raw_progress: i32 },
    /// Connect button pressed with the entered peer address.
    Connect(String),
    /// Stop-motors button pressed.
    Stop,
    /// Teardown requested.
    Disconnect,
}

/// Events surfaced to the presentation layer.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    ConnectionStatus(ConnectionStatus),
    LogMessage(StatusMessage),
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub severity: MessageSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Info,
    Success,
    Warning,
    Error,
}
