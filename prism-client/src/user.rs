//! Users, their flag bits, online status and profile photo.

use prism_tl_types::{enums, types};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatch::{Decoder, Family};
use crate::flags::{self, FlagBit, FlagSet};
use crate::refs::{FileLocation, Peer};

/// Raw `user.flags` bit guarding `photo`.
const HAS_PHOTO: u32 = 5;
/// Raw `user.flags` bit guarding `status`.
const HAS_STATUS: u32 = 6;

// ─── User ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    pub flags:                  UserFlags,
    pub id:                     i32,
    pub username:               String,
    pub first_name:             String,
    pub last_name:              String,
    pub phone:                  String,
    pub photo:                  Option<UserProfilePhoto>,
    pub status:                 Option<UserStatus>,
    pub access_hash:            i64,
    pub bot_info_version:       i32,
    pub bot_inline_placeholder: String,
    pub restriction_reason:     String,
}

impl User {
    pub fn peer(&self) -> Peer {
        Peer::User(self.id)
    }

    /// The peer to address this user with in outgoing requests.
    pub fn input_peer(&self) -> enums::InputPeer {
        if self.flags.is_self {
            enums::InputPeer::PeerSelf
        } else {
            enums::InputPeer::User(types::InputPeerUser {
                user_id:     self.id,
                access_hash: self.access_hash,
            })
        }
    }
}

/// Named bits of a user's `flags` word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserFlags {
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    pub is_self:          bool,
    pub contact:          bool,
    pub mutual_contact:   bool,
    pub deleted:          bool,
    pub bot:              bool,
    pub bot_chat_history: bool,
    pub bot_no_chats:     bool,
    pub verified:         bool,
    pub restricted:       bool,
    pub min:              bool,
    pub bot_inline_geo:   bool,
}

impl FlagSet for UserFlags {
    const TABLE: &'static [FlagBit<Self>] = &[
        (10, |f: &mut Self| f.is_self = true),
        (11, |f: &mut Self| f.contact = true),
        (12, |f: &mut Self| f.mutual_contact = true),
        (13, |f: &mut Self| f.deleted = true),
        (14, |f: &mut Self| f.bot = true),
        (15, |f: &mut Self| f.bot_chat_history = true),
        (16, |f: &mut Self| f.bot_no_chats = true),
        (17, |f: &mut Self| f.verified = true),
        (18, |f: &mut Self| f.restricted = true),
        (20, |f: &mut Self| f.min = true),
        (21, |f: &mut Self| f.bot_inline_geo = true),
    ];
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusKind {
    Online,
    Offline,
    Recently,
    LastWeek,
    LastMonth,
}

/// Last-seen information.
///
/// `timestamp` is the expiry of the online state for [`StatusKind::Online`],
/// the last time seen for [`StatusKind::Offline`], and zero otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserStatus {
    pub status:    StatusKind,
    pub online:    bool,
    pub timestamp: i32,
}

impl UserStatus {
    fn hidden(status: StatusKind) -> Self {
        Self { status, online: false, timestamp: 0 }
    }
}

// ─── Profile photo ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfilePhoto {
    pub id:          i64,
    pub photo_small: FileLocation,
    pub photo_large: FileLocation,
}

// ─── Builders ─────────────────────────────────────────────────────────────────

impl Decoder {
    /// `userEmpty` yields a user carrying only its ID; unsupported
    /// constructors yield `None`.
    ///
    /// `photo` and `status` are decoded only when their bit is set in the raw
    /// flags word, whatever the wire object carries in those fields.
    pub fn user(&self, input: enums::User) -> Option<User> {
        match input {
            enums::User::Empty(u) => Some(User { id: u.id, ..User::default() }),
            enums::User::User(u) => {
                let raw = u.flags as u32;
                let photo = match u.photo {
                    Some(p) if flags::is_set(raw, HAS_PHOTO) => self.user_profile_photo(p),
                    _ => None,
                };
                let status = match u.status {
                    Some(s) if flags::is_set(raw, HAS_STATUS) => self.user_status(s),
                    _ => None,
                };
                Some(User {
                    flags:                  UserFlags::from_bits(u.flags),
                    id:                     u.id,
                    username:               u.username.unwrap_or_default(),
                    first_name:             u.first_name.unwrap_or_default(),
                    last_name:              u.last_name.unwrap_or_default(),
                    phone:                  u.phone.unwrap_or_default(),
                    photo,
                    status,
                    access_hash:            u.access_hash.unwrap_or_default(),
                    bot_info_version:       u.bot_info_version.unwrap_or_default(),
                    bot_inline_placeholder: u.bot_inline_placeholder.unwrap_or_default(),
                    restriction_reason:     u.restriction_reason.unwrap_or_default(),
                })
            }
            other @ enums::User::Raw(_) => {
                self.unsupported(Family::User, &other);
                None
            }
        }
    }

    /// `None` for `userStatusEmpty` and unsupported constructors.
    pub fn user_status(&self, input: enums::UserStatus) -> Option<UserStatus> {
        use enums::UserStatus as S;

        match input {
            S::Empty => None,
            S::Online(s) => Some(UserStatus {
                status:    StatusKind::Online,
                online:    true,
                timestamp: s.expires,
            }),
            S::Offline(s) => Some(UserStatus {
                status:    StatusKind::Offline,
                online:    false,
                timestamp: s.was_online,
            }),
            S::Recently  => Some(UserStatus::hidden(StatusKind::Recently)),
            S::LastWeek  => Some(UserStatus::hidden(StatusKind::LastWeek)),
            S::LastMonth => Some(UserStatus::hidden(StatusKind::LastMonth)),
            other @ S::Raw(_) => {
                self.unsupported(Family::UserStatus, &other);
                None
            }
        }
    }

    /// `None` for `userProfilePhotoEmpty` and unsupported constructors.
    ///
    /// NOTE: the small location's `secret` is written into `photo_large`, and
    /// `photo_small.secret` stays zero.  Clients relying on this layout exist,
    /// so it is kept until the intended ownership of the field is confirmed.
    pub fn user_profile_photo(&self, input: enums::UserProfilePhoto) -> Option<UserProfilePhoto> {
        let pp = match input {
            enums::UserProfilePhoto::Empty => return None,
            enums::UserProfilePhoto::Photo(pp) => pp,
            other @ enums::UserProfilePhoto::Raw(_) => {
                self.unsupported(Family::UserProfilePhoto, &other);
                return None;
            }
        };

        let mut photo = UserProfilePhoto { id: pp.photo_id, ..UserProfilePhoto::default() };
        if let Some(big) = self.file_location(pp.photo_big) {
            photo.photo_large = big;
        }
        if let Some(small) = self.file_location(pp.photo_small) {
            photo.photo_small.dc = small.dc;
            photo.photo_small.local_id = small.local_id;
            photo.photo_large.secret = small.secret;
            photo.photo_small.volume_id = small.volume_id;
        }
        Some(photo)
    }

    /// `None` for unavailable or unsupported locations; the caller keeps its
    /// zero-valued location in that case.
    fn file_location(&self, input: enums::FileLocation) -> Option<FileLocation> {
        match input {
            enums::FileLocation::Unavailable(_) => None,
            enums::FileLocation::Location(l) => Some(FileLocation {
                dc:        l.dc_id,
                volume_id: l.volume_id,
                local_id:  l.local_id,
                secret:    l.secret,
            }),
            other @ enums::FileLocation::Raw(_) => {
                self.unsupported(Family::FileLocation, &other);
                None
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
