//! The decoding context every builder runs in.
//!
//! Builders are total: each one matches its wire enum exhaustively and, for
//! variants outside the family's declared set, reports an [`Unsupported`]
//! event to the injected [`DecodeObserver`] and returns the family's "no
//! value" result.  Nothing here ever returns an error or panics.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use prism_tl_types::Variant;

// ─── Family ──────────────────────────────────────────────────────────────────

/// Which builder encountered the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Message,
    MessageAction,
    MessageEntity,
    MessageForwardHeader,
    MessageMedia,
    User,
    UserStatus,
    UserProfilePhoto,
    FileLocation,
    Peer,
    Photo,
    Document,
    Chat,
    ChatFull,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A wire variant a builder has no mapping for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unsupported {
    pub family:  Family,
    /// TL constructor name, `"raw"` for constructors the decoder did not know.
    pub variant: &'static str,
    /// Wire constructor ID, set only when `variant` is `"raw"`.
    pub constructor_id: Option<u32>,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unsupported input format {}", self.family, self.variant)?;
        if let Some(id) = self.constructor_id {
            write!(f, " (#{id:08x})")?;
        }
        Ok(())
    }
}

// ─── Observers ───────────────────────────────────────────────────────────────

/// Receives a callback for every unsupported variant.
pub trait DecodeObserver: Send + Sync {
    fn unsupported(&self, event: &Unsupported);
}

impl<F> DecodeObserver for F
where
    F: Fn(&Unsupported) + Send + Sync,
{
    fn unsupported(&self, event: &Unsupported) {
        self(event)
    }
}

/// Writes each event to the `log` facade at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn unsupported(&self, event: &Unsupported) {
        log::warn!("[prism] {event}");
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl DecodeObserver for NullObserver {
    fn unsupported(&self, _: &Unsupported) {}
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<Unsupported>>,
}

impl RecordingObserver {
    /// A snapshot of everything recorded so far.
    pub fn seen(&self) -> Vec<Unsupported> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Unsupported> {
        std::mem::take(&mut *self.seen.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DecodeObserver for RecordingObserver {
    fn unsupported(&self, event: &Unsupported) {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ─── Decoder ─────────────────────────────────────────────────────────────────

/// Entry point for all builders.
///
/// Cheap to clone; stateless apart from the shared observer.
#[derive(Clone)]
pub struct Decoder {
    observer: Arc<dyn DecodeObserver>,
}

impl Decoder {
    /// Build a decoder around `observer`.
    pub fn new(observer: impl DecodeObserver + 'static) -> Self {
        Self { observer: Arc::new(observer) }
    }

    /// Build a decoder around an already shared observer, e.g. a
    /// [`RecordingObserver`] the caller still wants to inspect.
    pub fn with_observer(observer: Arc<dyn DecodeObserver>) -> Self {
        Self { observer }
    }

    /// A decoder that drops all diagnostics.
    pub fn silent() -> Self {
        Self::new(NullObserver)
    }

    pub(crate) fn unsupported<V: Variant>(&self, family: Family, value: &V) {
        self.observer.unsupported(&Unsupported {
            family,
            variant:        value.variant_name(),
            constructor_id: value.raw_id(),
        });
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(LogObserver)
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
