//! Trust certificate resolution.
//!
//! Verified (non-unsafe) connections to the client API need Riot's
//! self-signed root certificate. Precedence: a caller-supplied override wins,
//! unsafe mode attaches nothing, otherwise the default PEM file is read from
//! disk. Shipping that PEM next to the binary is a packaging concern outside
//! this crate.

use std::fs;
use std::path::{Path, PathBuf};

use lcu_common::{DiscoveryError, DiscoveryResult};

use crate::engine::DiscoveryConfig;

/// File name of the default trust certificate, expected beside the running
/// executable.
pub const DEFAULT_CERTIFICATE_FILE: &str = "riotgames.pem";

/// Well-known location of the default trust certificate.
pub fn default_certificate_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CERTIFICATE_FILE)
}

/// Read a PEM certificate file as UTF-8 text.
pub fn load_certificate(path: &Path) -> DiscoveryResult<String> {
    fs::read_to_string(path).map_err(|e| DiscoveryError::certificate_load(path, e.to_string()))
}

/// Decide which trust material, if any, to attach to the credentials.
pub(crate) fn resolve_certificate(config: &DiscoveryConfig) -> DiscoveryResult<Option<String>> {
    if let Some(certificate) = &config.certificate_override {
        return Ok(Some(certificate.clone()));
    }

    if config.unsafe_mode {
        return Ok(None);
    }

    let path = config
        .certificate_path
        .clone()
        .unwrap_or_else(default_certificate_path);
    load_certificate(&path).map(Some)
}
