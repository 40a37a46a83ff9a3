//! Platform process lister.
//!
//! Maps the host operating system to the single native command capable of
//! listing the League client process together with its full command line.
//! The mapping is a pure function of the platform identity, so it can be
//! tested without executing anything.

use lcu_common::{DiscoveryError, DiscoveryResult};

/// Image name of the client process this crate discovers.
pub const CLIENT_PROCESS_NAME: &str = "LeagueClientUx";

/// Supported host platforms.
///
/// A closed set: anything `std::env::consts::OS` reports outside of these
/// three values is rejected up front with
/// [`DiscoveryError::UnsupportedPlatform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

/// A process listing invocation: program plus arguments, kept apart so the
/// command can be inspected (and mocked) without going through a shell parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessListCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl Platform {
    /// Identify the platform this process is running on.
    pub fn current() -> DiscoveryResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`) to a
    /// supported platform.
    pub fn from_os(os: &str) -> DiscoveryResult<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            other => Err(DiscoveryError::unsupported_platform(other)),
        }
    }

    /// The canonical process listing command for this platform.
    ///
    /// Exactly one command per platform, no fallbacks:
    /// - Windows queries management instrumentation for the client image's
    ///   command line.
    /// - Linux and macOS list every process's argument string and filter for
    ///   the client name.
    pub fn list_command(&self) -> ProcessListCommand {
        match self {
            Self::Windows => ProcessListCommand {
                program: "WMIC",
                args: vec![
                    "PROCESS".to_string(),
                    "WHERE".to_string(),
                    format!("name='{}.exe'", CLIENT_PROCESS_NAME),
                    "GET".to_string(),
                    "CommandLine".to_string(),
                ],
            },
            Self::Linux | Self::MacOs => ProcessListCommand {
                program: "sh",
                args: vec![
                    "-c".to_string(),
                    format!("ps x -o args | grep '{}'", CLIENT_PROCESS_NAME),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_platforms_map_deterministically() {
        for platform in [Platform::Windows, Platform::Linux, Platform::MacOs] {
            let first = platform.list_command();
            let second = platform.list_command();
            assert_eq!(first, second);
            assert!(!first.program.is_empty());
            assert!(!first.args.is_empty());
        }
    }

    #[test]
    fn test_commands_name_the_client_process() {
        let windows = Platform::Windows.list_command();
        assert_eq!(windows.program, "WMIC");
        assert!(windows
            .args
            .iter()
            .any(|arg| arg.contains("LeagueClientUx.exe")));

        let posix = Platform::Linux.list_command();
        assert_eq!(posix.program, "sh");
        assert!(posix.args.iter().any(|arg| arg.contains("LeagueClientUx")));
    }

    #[test]
    fn test_linux_and_macos_share_the_posix_command() {
        assert_eq!(
            Platform::Linux.list_command(),
            Platform::MacOs.list_command()
        );
    }

    #[test]
    fn test_unsupported_os_is_rejected() {
        let err = Platform::from_os("freebsd").unwrap_err();
        assert!(matches!(err, DiscoveryError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn test_known_os_identifiers() {
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_os("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os("macos").unwrap(), Platform::MacOs);
    }
}
