//! Error types for prism-client.

use std::fmt;
use std::time::Duration;

// ─── RpcError ─────────────────────────────────────────────────────────────────

/// An `rpc_error` answer, as sent plus a parsed view of it.
///
/// Telegram packs a parameter into the message (`FLOOD_WAIT_30`,
/// `USER_MIGRATE_4`).  `name` and `value` hold the split form; `message`
/// keeps the text exactly as it arrived.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// HTTP-like status code.
    pub code:    i32,
    /// The server's message, untouched.
    pub message: String,
    /// `message` without its numeric suffix.
    pub name:    String,
    /// The numeric suffix, if there was one.
    pub value:   Option<u32>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        let message = message.into();
        let split = message.rsplit_once('_').and_then(|(head, tail)| {
            if !tail.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            tail.parse::<u32>().ok().map(|v| (head.to_owned(), v))
        });
        let (name, value) = match split {
            Some((name, v)) => (name, Some(v)),
            None            => (message.clone(), None),
        };
        Self { code, message, name, value }
    }

    /// Match against `name`.  A leading or trailing `*` turns the pattern into
    /// an ends-with or starts-with match: `"CHAT_*"`, `"*_INVALID"`.
    pub fn is(&self, pattern: &str) -> bool {
        match (pattern.strip_suffix('*'), pattern.strip_prefix('*')) {
            (Some(prefix), _)  => self.name.starts_with(prefix),
            (None, Some(tail)) => self.name.ends_with(tail),
            (None, None)       => self.name == pattern,
        }
    }

    /// Seconds to wait for a `420 FLOOD_WAIT_N`.
    pub fn flood_wait_seconds(&self) -> Option<u64> {
        if self.code != 420 || self.name != "FLOOD_WAIT" {
            return None;
        }
        self.value.map(u64::from)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC {}: {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

impl From<prism_tl_types::types::RpcError> for RpcError {
    fn from(e: prism_tl_types::types::RpcError) -> Self {
        Self::new(e.error_code, e.error_message)
    }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from any [`crate::Gateway`] call that admits one.
#[derive(Debug)]
pub enum InvocationError {
    /// Telegram rejected the request.
    Rpc(RpcError),
    /// The response slot was filled with something other than the call's
    /// declared return type.  Carries the constructor name that arrived.
    Unexpected(&'static str),
    /// The request was dropped: the outbound queue has no consumer, or the
    /// transport discarded the response slot without filling it.
    Dropped,
    /// No response arrived within the configured call timeout.
    Timeout(Duration),
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(e)          => write!(f, "{e}"),
            Self::Unexpected(n)   => write!(f, "don't know how to handle response: {n}"),
            Self::Dropped         => write!(f, "request dropped"),
            Self::Timeout(d)      => write!(f, "no response after {d:?}"),
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rpc(e) => Some(e),
            _            => None,
        }
    }
}

impl From<RpcError> for InvocationError {
    fn from(e: RpcError) -> Self { Self::Rpc(e) }
}

impl InvocationError {
    /// Returns `true` if this is the named RPC error (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Rpc(e) => e.is(pattern),
            _            => false,
        }
    }

    /// If this is a FLOOD_WAIT error, returns how many seconds to wait.
    pub fn flood_wait_seconds(&self) -> Option<u64> {
        match self {
            Self::Rpc(e) => e.flood_wait_seconds(),
            _            => None,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_suffix_is_split_off() {
        let e = RpcError::new(420, "FLOOD_WAIT_30");
        assert_eq!(e.name, "FLOOD_WAIT");
        assert_eq!(e.value, Some(30));
        assert_eq!(e.flood_wait_seconds(), Some(30));
    }

    #[test]
    fn plain_name_kept_whole() {
        let e = RpcError::new(400, "INVITE_HASH_EXPIRED");
        assert_eq!(e.name, "INVITE_HASH_EXPIRED");
        assert_eq!(e.value, None);
        assert_eq!(e.flood_wait_seconds(), None);
    }

    #[test]
    fn wildcard_matching() {
        let e = InvocationError::Rpc(RpcError::new(400, "CHAT_ID_INVALID"));
        assert!(e.is("CHAT_ID_INVALID"));
        assert!(e.is("CHAT_*"));
        assert!(e.is("*_INVALID"));
        assert!(!e.is("PEER_*"));
        assert!(!InvocationError::Dropped.is("CHAT_*"));
    }

    #[test]
    fn display_mentions_code_and_name() {
        let e = InvocationError::from(RpcError::new(400, "PEER_ID_INVALID"));
        assert_eq!(e.to_string(), "RPC 400: PEER_ID_INVALID");
    }

    #[test]
    fn message_is_kept_verbatim() {
        let e = RpcError::new(303, "PHONE_MIGRATE_2");
        assert_eq!(e.message, "PHONE_MIGRATE_2");
        assert_eq!((e.name.as_str(), e.value), ("PHONE_MIGRATE", Some(2)));
        assert_eq!(e.to_string(), "RPC 303: PHONE_MIGRATE_2");
    }

    #[test]
    fn non_numeric_or_empty_suffix_stays_in_name() {
        for msg in ["CHAT_ADMIN_REQUIRED", "TRAILING_", "SIGNED_+5"] {
            let e = RpcError::new(400, msg);
            assert_eq!((e.name.as_str(), e.value), (msg, None), "{msg}");
        }
    }

    #[test]
    fn converts_from_wire_error() {
        let wire = prism_tl_types::types::RpcError {
            error_code:    303,
            error_message: "USER_MIGRATE_4".into(),
        };
        let e = RpcError::from(wire);
        assert_eq!((e.code, e.name.as_str(), e.value), (303, "USER_MIGRATE", Some(4)));
    }
}
