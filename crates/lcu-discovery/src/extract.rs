//! Credential extraction from process listing output.
//!
//! The client process advertises its API credentials in its own command line:
//!
//! ```text
//! --app-port=56789 --remoting-auth-token=abc-123 --app-pid=4321
//! ```
//!
//! Extraction is all-or-nothing. Any missing marker, empty value, or numeric
//! parse failure makes the whole attempt fail; no partial field set is ever
//! returned.

use lcu_common::{DiscoveryError, DiscoveryResult};

const PORT_MARKER: &str = "--app-port=";
const TOKEN_MARKER: &str = "--remoting-auth-token=";
const PID_MARKER: &str = "--app-pid=";

/// The three required fields, before certificate resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedFields {
    pub port: u16,
    pub password: String,
    pub process_id: u32,
}

/// Extract port, auth token and process id from process listing output.
pub(crate) fn extract_fields(output: &str) -> DiscoveryResult<ExtractedFields> {
    let port = value_after(output, PORT_MARKER, |c| c.is_ascii_digit())?;
    let password = value_after(output, TOKEN_MARKER, is_token_char)?;
    let pid = value_after(output, PID_MARKER, |c| c.is_ascii_digit())?;

    Ok(ExtractedFields {
        port: parse_number(&port, PORT_MARKER)?,
        password,
        process_id: parse_number(&pid, PID_MARKER)?,
    })
}

// Auth tokens are word characters and hyphens.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// The longest run of characters matching `accept` immediately after the
/// first occurrence of `marker`. An absent marker and an empty run are both
/// failures.
fn value_after(
    haystack: &str,
    marker: &str,
    accept: impl Fn(char) -> bool,
) -> DiscoveryResult<String> {
    let start = haystack
        .find(marker)
        .ok_or_else(|| DiscoveryError::not_found(format!("marker `{marker}` not in output")))?;

    let value: String = haystack[start + marker.len()..]
        .chars()
        .take_while(|&c| accept(c))
        .collect();

    if value.is_empty() {
        return Err(DiscoveryError::not_found(format!(
            "marker `{marker}` carries no value"
        )));
    }

    Ok(value)
}

fn parse_number<T: std::str::FromStr>(digits: &str, marker: &str) -> DiscoveryResult<T> {
    digits
        .parse()
        .map_err(|_| DiscoveryError::not_found(format!("marker `{marker}` value out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "/opt/riot/LeagueClientUx --no-rads \
         --remoting-auth-token=abc-123 --app-port=56789 --app-pid=4321 --locale=en_GB";

    #[test]
    fn test_extracts_all_three_fields() {
        let fields = extract_fields(LISTING).unwrap();
        assert_eq!(
            fields,
            ExtractedFields {
                port: 56789,
                password: "abc-123".to_string(),
                process_id: 4321,
            }
        );
    }

    #[test]
    fn test_token_stops_at_non_token_character() {
        let fields =
            extract_fields("--app-port=1 --remoting-auth-token=a_B-9 --app-pid=2").unwrap();
        assert_eq!(fields.password, "a_B-9");
    }

    #[test]
    fn test_each_missing_marker_fails_the_attempt() {
        for marker in [PORT_MARKER, TOKEN_MARKER, PID_MARKER] {
            let without = LISTING.replace(marker, "--elided=");
            let err = extract_fields(&without).unwrap_err();
            assert!(
                matches!(err, DiscoveryError::NotFound { .. }),
                "expected NotFound when {marker} is absent"
            );
        }
    }

    #[test]
    fn test_empty_value_fails() {
        let err =
            extract_fields("--app-port= --remoting-auth-token=tok --app-pid=7").unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound { .. }));
    }

    #[test]
    fn test_port_beyond_u16_fails() {
        let err =
            extract_fields("--app-port=70000 --remoting-auth-token=tok --app-pid=7").unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound { .. }));
    }

    #[test]
    fn test_garbage_output_fails() {
        let err = extract_fields("grep: no such process").unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound { .. }));
    }
}
