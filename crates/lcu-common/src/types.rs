//! Core domain types.

use serde::{Deserialize, Serialize};

/// Connection credentials for the local League client API.
///
/// Assembled from the client process's own command line on every successful
/// discovery attempt. Extraction is all-or-nothing: `port`, `password` and
/// `process_id` are always jointly present, there is no partial record.
/// The record is never cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// TCP port the client API listens on.
    pub port: u16,

    /// Opaque authentication token, passed as the HTTP basic-auth password.
    pub password: String,

    /// OS process identifier of the discovered client.
    pub process_id: u32,

    /// PEM-encoded trust material for verified connections.
    ///
    /// `None` when operating in unsafe mode (the default) and no override
    /// certificate was supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}
