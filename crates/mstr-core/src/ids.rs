//! Strongly typed identifier wrappers.
//!
//! Two flavours:
//!
//! - **Integer ids** (`AgentId`) are `Copy + Ord + Hash` and index directly
//!   into per-agent `Vec`s.
//! - **String ids** (`LinkId`, `FacilityId`) mirror the identifiers carried by
//!   network and facility files.  The label is held in an `Arc<str>` so an
//!   id can be cloned into every leg and activity of an itinerary without
//!   copying the bytes.

use std::fmt;
use std::sync::Arc;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

/// Generate a typed ID wrapper around a shared string label.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(from = "String", into = "String")
        )]
        $vis struct $name(Arc<str>);

        impl $name {
            pub fn new(label: impl AsRef<str>) -> Self {
                Self(Arc::from(label.as_ref()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::new(label)
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self(Arc::from(label))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0.to_string()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }
    };
}

typed_id! {
    /// Index of an agent (person) in the population.
    pub struct AgentId(u32);
}

string_id! {
    /// Identifier of a directed network link.
    pub struct LinkId;
}

string_id! {
    /// Identifier of an activity facility (e.g. a teleportation station).
    pub struct FacilityId;
}
