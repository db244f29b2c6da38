//! Transport Capability
//!
//! The session never talks to a platform Bluetooth stack directly; it
//! drives these two traits. A production implementation wraps the
//! platform's RFCOMM primitives, tests script a mock.

#![allow(async_fn_in_trait)]

use anyhow::Result;

/// Serial Port Profile service identifier. The vehicle firmware listens
/// on this channel; any transport implementation must open the channel
/// with this id (or an equivalent well-known serial-service id) to stay
/// interoperable.
pub const SPP_SERVICE_UUID: &str = "00001101-0000-1000-8000-00805F9B34FB";

/// Connection-establishment capability of the underlying link.
pub trait Transport {
    /// Resolved peer identity, consumed by [`Transport::open_channel`].
    type Peer;
    type Channel: Channel;

    /// Resolve a transport address (e.g. `"00:11:22:33:AA:BB"`) to a peer
    /// identity. Fails if the address is malformed or unknown to the
    /// adapter.
    async fn resolve(&self, address: &str) -> Result<Self::Peer>;

    /// Stop any in-progress device discovery on the adapter. Discovery
    /// degrades connection establishment, so the session calls this
    /// before opening a channel. Best-effort.
    async fn cancel_discovery(&self) -> Result<()>;

    /// Open a connection-oriented channel to the peer for the given
    /// service identifier.
    async fn open_channel(&self, peer: Self::Peer, service_id: &str) -> Result<Self::Channel>;
}

/// An established stream channel to the peer. Exclusively owned by the
/// session; dropped or closed on teardown.
pub trait Channel {
    /// Write a prefix of `buf`, returning how many bytes were accepted.
    /// Partial writes are legal; the session retries the remainder.
    async fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Tear the channel down. Errors are logged and swallowed by the
    /// session; a failed close never blocks teardown.
    async fn close(&mut self) -> Result<()>;
}
