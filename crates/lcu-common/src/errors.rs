//! Error types for League client discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for discovery operations.
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;

/// Errors produced while locating the League client and extracting its
/// credentials.
///
/// Failure causes within a single attempt are deliberately collapsed into
/// [`DiscoveryError::NotFound`]: a client that is not running, a process
/// listing command that fails, and listing output missing a credential marker
/// are indistinguishable to callers. The `reason` string exists for logs only.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The host operating system has no known process listing command.
    /// Fatal and never retried, regardless of discovery mode.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// The League client could not be discovered on this attempt.
    #[error("League client not found: {reason}")]
    NotFound { reason: String },

    /// The default trust certificate was required but could not be read.
    /// Fatal for the attempt; not a transient discovery failure.
    #[error("Failed to load trust certificate {path:?}: {reason}")]
    CertificateLoad { path: PathBuf, reason: String },

    /// An await-mode discovery loop was stopped by the caller's
    /// cancellation token.
    #[error("Discovery cancelled by caller")]
    Cancelled,
}

impl DiscoveryError {
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn certificate_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CertificateLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
