pub mod logging;
pub mod service;
pub mod session;
pub mod transport;

// Re-export the session and coordinator for convenience
pub use service::LinkService;
pub use session::ConnectionSession;
