//! Motor Link
//!
//! Library for driving two independent bidirectional motors over a
//! point-to-point serial Bluetooth link, using the text-based protocol
//! understood by the vehicle-side microcontroller:
//!
//! ```text
//! "stop x"                                   stop all motors
//! "move {L_DIR}{L_SPEED} {R_DIR}{R_SPEED}x"  set both motor speeds
//! ```
//!
//! where `*_DIR` is `0` (forward) or `1` (backward) and `*_SPEED` is a
//! decimal magnitude in `[0, 255]`.
//!
//! Ex: `"move 0100 0100x"` sets both wheels forward at speed 100.
//! `"move 0255 1255x"` sets the left wheel full forward and the right
//! wheel full backward. This will make your vehicle do an awesome donut!
//!
//! ## Architecture
//!
//! - [`domain`]: protocol encoding ([`CommandEncoder`]) and the shared
//!   models/settings types.
//! - [`infrastructure`]: the connection session state machine, the opaque
//!   [`Transport`] capability it drives, the input-event coordinator, and
//!   logging setup.
//!
//! The presentation layer (sliders, buttons, discovery UI) is not part of
//! this crate: it feeds [`ControlInput`] events in and renders
//! [`LinkEvent`]s out.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::encoder::{CommandEncoder, SignedSpeed, STOP_COMMAND};
pub use domain::models::{
    Axis, ConnectionStatus, ControlInput, Direction, LinkEvent, MessageSeverity, StatusMessage,
};
pub use domain::settings::{EncoderSettings, LinkSettings, LogSettings};
pub use error::SessionError;
pub use infrastructure::session::ConnectionSession;
pub use infrastructure::service::LinkService;
pub use infrastructure::transport::{Channel, Transport, SPP_SERVICE_UUID};
