//! Process listing execution.
//!
//! [`ProcessQuery`] is the seam between the discovery engine and the
//! operating system: the engine decides *what* to run and how to interpret
//! the result, implementations decide *how* it runs. Tests substitute a
//! scripted implementation; production uses [`SystemProcessQuery`].

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use lcu_common::{DiscoveryError, DiscoveryResult};

use crate::platform::ProcessListCommand;

/// Executes a process listing command and returns its standard output as
/// text.
///
/// Every failure mode collapses to [`DiscoveryError::NotFound`]: a spawn
/// error, a non-zero exit (grep exits 1 when the client is not running) and
/// empty output are indistinguishable from the client simply being absent.
#[async_trait]
pub trait ProcessQuery: Send + Sync {
    async fn query(&self, command: &ProcessListCommand) -> DiscoveryResult<String>;
}

/// Production [`ProcessQuery`] backed by a real child process.
#[derive(Debug, Default)]
pub struct SystemProcessQuery;

#[async_trait]
impl ProcessQuery for SystemProcessQuery {
    async fn query(&self, command: &ProcessListCommand) -> DiscoveryResult<String> {
        debug!("Running process listing: {} {:?}", command.program, command.args);

        let output = Command::new(command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DiscoveryError::not_found(format!("process listing failed to run: {e}"))
            })?;

        if !output.status.success() {
            return Err(DiscoveryError::not_found(format!(
                "process listing exited with {}",
                output.status
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        if text.trim().is_empty() {
            return Err(DiscoveryError::not_found(
                "process listing produced no output",
            ));
        }

        Ok(text.into_owned())
    }
}
