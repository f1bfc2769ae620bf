//! Telegram TL wire variants consumed by the prism translation layer.
//!
//! These are the values the (external) binary decoder hands over after it
//! has parsed a frame.  Nothing in this crate reads or writes bytes; it only
//! fixes the *shape* of every constructor the translation layer understands.
//!
//! # Overview
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`types`]     | Concrete constructors (bare types) as `struct`s            |
//! | [`enums`]     | Boxed types as `enum`s, one variant per constructor        |
//! | [`functions`] | RPC functions as `struct`s implementing [`RemoteCall`]     |
//! | [`Object`]    | Anything that can land in a call's response slot           |
//!
//! Flag-conditional fields are `Option`s.  Constructors that carry a `flags`
//! word keep it verbatim in a `flags` field, because some consumers key
//! behaviour off bits that have no dedicated field.
//!
//! Every boxed enum also has a [`Raw`] variant: the decoder emits it for
//! constructor IDs it does not know (e.g. a newer layer), so a frame never has
//! to be rejected just because one nested object is unfamiliar.

#![deny(unsafe_code)]

pub mod enums;
pub mod functions;
pub mod types;
mod object;

pub use functions::Request;
pub use object::Object;

/// An object the decoder could not map to a known constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct Raw {
    /// The constructor ID read from the wire.
    pub constructor_id: u32,
    /// Undecoded body, without the constructor ID.
    pub body: Vec<u8>,
}

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Every boxed type can name the constructor it currently holds.
///
/// The name is the schema name (`messageMediaGeo`, `userStatusOnline`, …),
/// which is what diagnostics print.
pub trait Variant {
    /// The TL constructor name of the active variant.
    fn variant_name(&self) -> &'static str;

    /// The wire constructor ID, when the active variant is [`Raw`].
    fn raw_id(&self) -> Option<u32> {
        None
    }
}

/// Marks a function type that can be sent to Telegram as an RPC call.
///
/// `Return` is the type Telegram will respond with.  Conversion out of a
/// generic [`Object`] hands the object back untouched when it is something
/// else, so the caller can still report what actually arrived.
pub trait RemoteCall: Into<Request> {
    /// The expected response type.
    type Return: TryFrom<Object, Error = Object>;
}
