//! Discovery engine: single-attempt extraction plus the retry/poll control
//! flow around it.
//!
//! Two modes, selected by [`DiscoveryConfig::await_connection`]:
//!
//! - **Immediate** (default): exactly one attempt; its outcome is the
//!   outcome of the call.
//! - **Await**: attempts repeat at a constant interval until one succeeds or
//!   the caller's [`CancellationToken`] fires. Attempt failures are logged
//!   and swallowed, never surfaced.
//!
//! The platform support check runs once, before the first attempt, in both
//! modes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use lcu_common::{Credentials, DiscoveryError, DiscoveryResult};

use crate::certificate;
use crate::extract;
use crate::platform::{Platform, ProcessListCommand};
use crate::query::{ProcessQuery, SystemProcessQuery};

/// Default delay between attempts in await mode.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2500);

/// Caller-supplied discovery options. Immutable for the duration of one
/// `discover` call.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Poll until the client appears instead of failing on the first miss.
    pub await_connection: bool,

    /// Delay between attempts in await mode. Ignored in immediate mode.
    pub poll_interval: Duration,

    /// Trust material that takes precedence over the bundled default.
    pub certificate_override: Option<String>,

    /// When true (the default), no trust certificate is attached at all.
    pub unsafe_mode: bool,

    /// Location of the default trust certificate. `None` means the
    /// well-known path beside the running executable.
    pub certificate_path: Option<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            await_connection: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            certificate_override: None,
            unsafe_mode: true,
            certificate_path: None,
        }
    }
}

/// Discovers the running League client and extracts its API credentials.
pub struct DiscoveryEngine {
    query: Arc<dyn ProcessQuery>,
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryEngine {
    /// Engine backed by real child-process execution.
    pub fn new() -> Self {
        Self::with_query(Arc::new(SystemProcessQuery))
    }

    /// Engine with a custom process listing backend. Tests use this to
    /// substitute scripted output.
    pub fn with_query(query: Arc<dyn ProcessQuery>) -> Self {
        Self { query }
    }

    /// Discover credentials on the current host.
    pub async fn discover(&self, config: &DiscoveryConfig) -> DiscoveryResult<Credentials> {
        self.discover_with_cancel(config, CancellationToken::new())
            .await
    }

    /// Discover credentials on the current host, stopping early when
    /// `cancel` fires. Cancellation only matters in await mode, where the
    /// loop would otherwise run forever; it releases the pending timer and
    /// returns [`DiscoveryError::Cancelled`].
    pub async fn discover_with_cancel(
        &self,
        config: &DiscoveryConfig,
        cancel: CancellationToken,
    ) -> DiscoveryResult<Credentials> {
        self.discover_for_os(std::env::consts::OS, config, cancel)
            .await
    }

    /// Discover credentials for an explicit OS identifier.
    ///
    /// The platform check happens here, exactly once, before any listing
    /// command is executed and regardless of mode.
    pub async fn discover_for_os(
        &self,
        os: &str,
        config: &DiscoveryConfig,
        cancel: CancellationToken,
    ) -> DiscoveryResult<Credentials> {
        let platform = Platform::from_os(os)?;
        let command = platform.list_command();

        if !config.await_connection {
            return self.attempt(&command, config).await;
        }

        loop {
            if cancel.is_cancelled() {
                return Err(DiscoveryError::Cancelled);
            }

            match self.attempt(&command, config).await {
                Ok(credentials) => {
                    info!(
                        port = credentials.port,
                        process_id = credentials.process_id,
                        "League client discovered"
                    );
                    return Ok(credentials);
                }
                // A broken certificate setup will not fix itself between
                // polls; abort the loop instead of retrying it silently.
                Err(err @ DiscoveryError::CertificateLoad { .. }) => return Err(err),
                Err(err) => {
                    debug!(
                        "Discovery attempt failed ({err}), retrying in {:?}",
                        config.poll_interval
                    );
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => return Err(DiscoveryError::Cancelled),
                _ = tokio::time::sleep(config.poll_interval) => {}
            }
        }
    }

    /// One discovery attempt: list processes, extract the three credential
    /// fields, resolve trust material, assemble the record.
    async fn attempt(
        &self,
        command: &ProcessListCommand,
        config: &DiscoveryConfig,
    ) -> DiscoveryResult<Credentials> {
        let output = self.query.query(command).await?;
        let fields = extract::extract_fields(&output)?;
        let certificate = certificate::resolve_certificate(config)?;

        Ok(Credentials {
            port: fields.port,
            password: fields.password,
            process_id: fields.process_id,
            certificate,
        })
    }
}
