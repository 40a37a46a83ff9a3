//! # LCU Discovery
//!
//! Locates the running League of Legends client on the host machine and
//! extracts the credentials for its local API from the client's own command
//! line.
//!
//! This crate provides:
//! - Platform-specific process listing commands ([`platform`])
//! - Marker-based credential extraction ([`extract`])
//! - Trust certificate resolution ([`certificate`])
//! - The retry/poll discovery engine ([`engine`])
//!
//! Discovery only produces [`Credentials`](lcu_common::Credentials); talking
//! to the client API with them is out of scope here.
//!
//! ```no_run
//! # async fn run() -> lcu_common::DiscoveryResult<()> {
//! use lcu_discovery::{discover, DiscoveryConfig};
//!
//! let credentials = discover(&DiscoveryConfig::default()).await?;
//! println!("client API on 127.0.0.1:{}", credentials.port);
//! # Ok(())
//! # }
//! ```

pub mod certificate;
pub mod engine;
pub mod platform;
pub mod query;

mod extract;

// Re-export main types
pub use engine::{DiscoveryConfig, DiscoveryEngine, DEFAULT_POLL_INTERVAL};
pub use platform::{Platform, ProcessListCommand, CLIENT_PROCESS_NAME};
pub use query::{ProcessQuery, SystemProcessQuery};

use lcu_common::{Credentials, DiscoveryResult};
use tokio_util::sync::CancellationToken;

/// Discover the client credentials with a one-off engine.
pub async fn discover(config: &DiscoveryConfig) -> DiscoveryResult<Credentials> {
    DiscoveryEngine::new().discover(config).await
}

/// [`discover`], stoppable through a cancellation token. Await-mode callers
/// should prefer this so an abandoned wait does not keep polling forever.
pub async fn discover_with_cancel(
    config: &DiscoveryConfig,
    cancel: CancellationToken,
) -> DiscoveryResult<Credentials> {
    DiscoveryEngine::new().discover_with_cancel(config, cancel).await
}
