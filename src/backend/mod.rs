#[cfg(feature = "sync")]
pub mod sync_client;
pub mod traits;
#[cfg(feature = "async")]
pub mod async_client;

pub use traits::*;

/// Transport used when the caller does not supply one
#[cfg(feature = "sync")]
pub type DefaultTransport = sync_client::SyncTransport;
#[cfg(feature = "async")]
pub type DefaultTransport = async_client::AsyncTransport;
