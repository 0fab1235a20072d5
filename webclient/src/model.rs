pub mod atom;
pub mod profile;

pub use atom::*;
pub use profile::*;

use crate::error::Result;
use async_trait::async_trait;

/// One platform adapter. Given a user handle, produce a normalized
/// stats record or fail with a typed [`crate::error::Error`].
///
/// Implementations share no state and are safe to invoke concurrently;
/// each call constructs a fresh record from the upstream responses.
#[async_trait]
pub trait Client: Send + Sync {
    fn platform(&self) -> Platform;

    async fn fetch_stats(&self, handle: &str) -> Result<Profile>;
}
