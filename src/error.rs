use thiserror::Error;

/// Failures surfaced at the session boundary.
///
/// Every variant is recoverable: the session settles back on
/// `Disconnected` and never keeps a dangling channel handle. No retries
/// happen inside the crate; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Empty or whitespace-only peer address, rejected before any
    /// transport call is made.
    #[error("peer address must not be empty")]
    InvalidAddress,

    /// The transport could not resolve the address to a peer.
    #[error("could not resolve peer address: {0}")]
    ResolutionFailed(anyhow::Error),

    /// The service channel to the peer could not be established.
    #[error("could not open service channel: {0}")]
    ChannelOpenFailed(anyhow::Error),

    /// A mid-session transport write error. The session has already
    /// dropped to `Disconnected` when this is returned.
    #[error("write to peer failed: {0}")]
    WriteFailed(anyhow::Error),

    /// Operation requires an established connection.
    #[error("not connected to a peer")]
    NotConnected,
}
