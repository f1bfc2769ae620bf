//! The value delivered into a call's response slot.

use crate::{Raw, Variant, enums, types};

/// Anything the transport may deliver as the answer to a call.
///
/// The transport does not know which function a response belongs to beyond
/// its correlation ID, so it hands over whatever it decoded and the caller
/// narrows it with [`TryFrom`].
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Updates(enums::Updates),
    Messages(enums::messages::Messages),
    Chats(enums::messages::Chats),
    ChatFull(enums::messages::ChatFull),
    RpcError(types::RpcError),
    Raw(Raw),
}

impl Variant for Object {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Updates(x)  => x.variant_name(),
            Self::Messages(x) => x.variant_name(),
            Self::Chats(x)    => x.variant_name(),
            Self::ChatFull(x) => x.variant_name(),
            Self::RpcError(_) => "rpc_error",
            Self::Raw(_)      => "raw",
        }
    }

    fn raw_id(&self) -> Option<u32> {
        match self {
            Self::Updates(x)  => x.raw_id(),
            Self::Messages(x) => x.raw_id(),
            Self::Chats(x)    => x.raw_id(),
            Self::ChatFull(x) => x.raw_id(),
            Self::RpcError(_) => None,
            Self::Raw(r)      => Some(r.constructor_id),
        }
    }
}

macro_rules! object_variant {
    ($variant:ident($ty:ty)) => {
        impl From<$ty> for Object {
            fn from(x: $ty) -> Self { Self::$variant(x) }
        }

        impl TryFrom<Object> for $ty {
            type Error = Object;

            fn try_from(obj: Object) -> Result<Self, Object> {
                match obj {
                    Object::$variant(x) => Ok(x),
                    other               => Err(other),
                }
            }
        }
    };
}

object_variant!(Updates(enums::Updates));
object_variant!(Messages(enums::messages::Messages));
object_variant!(Chats(enums::messages::Chats));
object_variant!(ChatFull(enums::messages::ChatFull));
object_variant!(RpcError(types::RpcError));
object_variant!(Raw(Raw));
