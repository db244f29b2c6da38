//! Link Service
//!
//! Coordinator tying the command encoder to the connection session. The
//! presentation layer feeds it [`ControlInput`] events (slider moves,
//! connect/stop/disconnect clicks) and renders the [`LinkEvent`]s it
//! emits; this crate never touches a widget.

use crate::domain::encoder::CommandEncoder;
use crate::domain::models::{
    Axis, ControlInput, LinkEvent, MessageSeverity, StatusMessage,
};
use crate::domain::settings::{EncoderSettings, LinkSettings};
use crate::error::SessionError;
use crate::infrastructure::session::ConnectionSession;
use crate::infrastructure::transport::Transport;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub struct LinkService<T: Transport> {
    encoder: CommandEncoder,
    session: ConnectionSession<T>,
    event_sender: mpsc::UnboundedSender<LinkEvent>,
}

impl<T: Transport> LinkService<T> {
    pub fn new(
        transport: T,
        encoder_settings: EncoderSettings,
        link_settings: LinkSettings,
        event_sender: mpsc::UnboundedSender<LinkEvent>,
    ) -> Self {
        Self {
            encoder: CommandEncoder::new(encoder_settings),
            session: ConnectionSession::new(transport, link_settings, event_sender.clone()),
            event_sender,
        }
    }

    /// Apply one input event.
    ///
    /// Slider moves update the stored speed pair and, while connected,
    /// resend the full two-axis move command (the protocol has no partial
    /// update). While disconnected the encoder still tracks the sliders
    /// but nothing is sent.
    pub async fn handle(&mut self, input: ControlInput) -> Result<(), SessionError> {
        match input {
            ControlInput::Slider { axis, raw_progress } => {
                match axis {
                    Axis::Left => self.encoder.set_left(raw_progress),
                    Axis::Right => self.encoder.set_right(raw_progress),
                };
                if !self.session.is_connected() {
                    debug!(?axis, raw_progress, "slider moved while disconnected");
                    return Ok(());
                }
                let command = self.encoder.render_move();
                self.session.send(command.as_bytes()).await
            }
            ControlInput::Connect(address) => {
                if address.trim().is_empty() {
                    // Operator-facing nudge; the session would reject the
                    // address anyway.
                    self.send_log(
                        "Enter the receiver address into the text field",
                        MessageSeverity::Warning,
                    );
                    return Err(SessionError::InvalidAddress);
                }
                self.session.connect(&address).await
            }
            ControlInput::Stop => {
                let command = self.encoder.render_stop();
                self.session.send(command.as_bytes()).await
            }
            ControlInput::Disconnect => {
                self.session.close().await;
                Ok(())
            }
        }
    }

    /// Drain the input stream until the source hangs up, then tear the
    /// session down. Errors are surfaced as events and logged; the loop
    /// keeps running so one failed send does not kill the operator's
    /// controls.
    pub async fn run(&mut self, mut inputs: mpsc::UnboundedReceiver<ControlInput>) {
        while let Some(input) = inputs.recv().await {
            if let Err(e) = self.handle(input).await {
                warn!("input handling failed: {e}");
            }
        }
        self.session.close().await;
    }

    pub fn session(&self) -> &ConnectionSession<T> {
        &self.session
    }

    pub fn encoder(&self) -> &CommandEncoder {
        &self.encoder
    }

    fn send_log(&self, message: &str, severity: MessageSeverity) {
        let _ = self.event_sender.send(LinkEvent::LogMessage(StatusMessage {
            message: message.to_string(),
            severity,
        }));
    }
}
