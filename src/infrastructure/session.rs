//! Connection Session
//!
//! Owns the lifecycle of one outbound connection to a peer: connect,
//! send, close, and the status transitions in between. At most one live
//! channel exists at a time; the handle lives inside the `Connected`
//! state variant, so "handle present iff connected" holds by
//! construction.

use crate::domain::models::{ConnectionStatus, LinkEvent, MessageSeverity, StatusMessage};
use crate::domain::settings::LinkSettings;
use crate::error::SessionError;
use crate::infrastructure::transport::{Channel, Transport};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

enum SessionState<C> {
    Disconnected,
    Connecting,
    Connected(C),
}

/// Single logical session to one remote peer.
///
/// All operations take `&mut self`, so a `close` can never race a
/// `connect` within safe code; callers that share the session across
/// tasks must serialize access themselves (a mutex or a single-owner
/// task such as [`crate::LinkService`]).
pub struct ConnectionSession<T: Transport> {
    transport: T,
    settings: LinkSettings,
    state: SessionState<T::Channel>,
    event_sender: mpsc::UnboundedSender<LinkEvent>,
}

impl<T: Transport> ConnectionSession<T> {
    pub fn new(
        transport: T,
        settings: LinkSettings,
        event_sender: mpsc::UnboundedSender<LinkEvent>,
    ) -> Self {
        Self {
            transport,
            settings,
            state: SessionState::Disconnected,
            event_sender,
        }
    }

    /// Connect to the peer at `address`.
    ///
    /// An empty address fails fast with [`SessionError::InvalidAddress`]
    /// before any transport call; attempting a connect with a malformed
    /// address is the documented source of resolution failures, and the
    /// caller is expected to have validated its input field. Any
    /// previously established channel is closed first.
    ///
    /// On failure the session is guaranteed to hold no channel handle and
    /// the status settles on `Disconnected` after a transient `Failed`
    /// event.
    pub async fn connect(&mut self, address: &str) -> Result<(), SessionError> {
        if address.trim().is_empty() {
            return Err(SessionError::InvalidAddress);
        }

        // Reconnecting over a live session would leak the old channel.
        self.close().await;

        info!(address, "connecting to peer");
        self.set_status(ConnectionStatus::Connecting);

        // Ongoing discovery degrades channel establishment. Best-effort.
        if let Err(e) = self.transport.cancel_discovery().await {
            warn!("could not cancel discovery: {e:#}");
        }

        let peer = match self.transport.resolve(address).await {
            Ok(peer) => peer,
            Err(e) => {
                return Err(self.fail_connect(SessionError::ResolutionFailed(e)));
            }
        };

        let channel = match self
            .transport
            .open_channel(peer, &self.settings.service_uuid)
            .await
        {
            Ok(channel) => channel,
            Err(e) => {
                return Err(self.fail_connect(SessionError::ChannelOpenFailed(e)));
            }
        };

        self.state = SessionState::Connected(channel);
        self.set_status(ConnectionStatus::Connected);
        self.send_log("Connection made", MessageSeverity::Success);
        info!(address, "connection established");
        Ok(())
    }

    /// Write `payload` in full to the peer.
    ///
    /// Partial writes are retried for the remainder until complete or
    /// until a write error. On error the channel is released, the status
    /// drops to `Disconnected`, and [`SessionError::WriteFailed`] is
    /// returned. There is no automatic retry: this is a best-effort,
    /// latest-value-wins control channel.
    pub async fn send(&mut self, payload: &[u8]) -> Result<(), SessionError> {
        // Take the channel out for the duration of the write so the error
        // path can close and release it without juggling borrows.
        let mut channel = match std::mem::replace(&mut self.state, SessionState::Disconnected) {
            SessionState::Connected(channel) => channel,
            state => {
                self.state = state;
                return Err(SessionError::NotConnected);
            }
        };

        let mut written = 0;
        while written < payload.len() {
            let result = match channel.write(&payload[written..]).await {
                Ok(0) => Err(anyhow::anyhow!("channel accepted zero bytes")),
                other => other,
            };
            match result {
                Ok(n) => written += n,
                Err(e) => {
                    return Err(self.fail_write(channel, e).await);
                }
            }
        }

        self.state = SessionState::Connected(channel);
        debug!(bytes = payload.len(), "payload written");
        Ok(())
    }

    /// Release the channel and drop to `Disconnected`.
    ///
    /// Idempotent: closing an already-disconnected session is a no-op and
    /// emits nothing. Errors from the underlying close are logged and
    /// swallowed; a failed close never blocks teardown.
    pub async fn close(&mut self) {
        match std::mem::replace(&mut self.state, SessionState::Disconnected) {
            SessionState::Disconnected => {}
            SessionState::Connecting => {
                self.set_status(ConnectionStatus::Disconnected);
            }
            SessionState::Connected(mut channel) => {
                if let Err(e) = channel.close().await {
                    warn!("unable to end the connection: {e:#}");
                }
                self.set_status(ConnectionStatus::Disconnected);
                info!("disconnected from peer");
            }
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        match self.state {
            SessionState::Disconnected => ConnectionStatus::Disconnected,
            SessionState::Connecting => ConnectionStatus::Connecting,
            SessionState::Connected(_) => ConnectionStatus::Connected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, SessionState::Connected(_))
    }

    /// Connect-phase failure: surface the reason, then settle on
    /// `Disconnected`. `Failed` is transient and only ever observable as
    /// an event.
    fn fail_connect(&mut self, error: SessionError) -> SessionError {
        warn!("connect failed: {error}");
        self.state = SessionState::Disconnected;
        self.set_status(ConnectionStatus::Failed);
        self.send_log(&error.to_string(), MessageSeverity::Error);
        self.set_status(ConnectionStatus::Disconnected);
        error
    }

    /// Mid-session write failure: close and release the channel, then
    /// settle on `Disconnected`. Close errors are swallowed here so they
    /// cannot mask the write error.
    async fn fail_write(&mut self, mut channel: T::Channel, cause: anyhow::Error) -> SessionError {
        let error = SessionError::WriteFailed(cause);
        warn!("{error}");
        if let Err(e) = channel.close().await {
            warn!("unable to end the connection: {e:#}");
        }
        self.send_log(&error.to_string(), MessageSeverity::Error);
        self.set_status(ConnectionStatus::Disconnected);
        error
    }

    fn set_status(&self, status: ConnectionStatus) {
        let _ = self
            .event_sender
            .send(LinkEvent::ConnectionStatus(status));
    }

    fn send_log(&self, message: &str, severity: MessageSeverity) {
        let _ = self.event_sender.send(LinkEvent::LogMessage(StatusMessage {
            message: message.to_string(),
            severity,
        }));
    }
}
