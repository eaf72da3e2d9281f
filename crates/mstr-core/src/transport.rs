//! Transport modes and the labels shared by the teleportation stage.
//!
//! A mode is identified on the wire (config files, routing-module bindings)
//! by its string label.  The well-known labels get their own variants so
//! matching is exhaustive; anything else a host framework invents is carried
//! as [`TransportMode::Other`].  Equality and hashing go by label, so an
//! `Other("walk")` built by hand is the same mode as [`TransportMode::Walk`];
//! [`TransportMode::from`] / [`str::parse`] still pick the dedicated variant.
//!
//! The trip composer and the composite main-mode classifier must agree on
//! the teleport leg's label; both read it from [`TELEPORT_LEG_MODE`] here.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Activity type of the zero-duration marker inserted at the station.
pub const STAGE_ACTIVITY: &str = "pr interaction";

/// Mode of the synthesized zero-time leg from the rider's origin to the station.
pub const TELEPORT_LEG_MODE: TransportMode = TransportMode::TeleportLeg;

/// Main mode of a whole trip that contains a [`TELEPORT_LEG_MODE`] leg.
pub const TELEPORT_MAIN_MODE: TransportMode = TransportMode::TeleportMain;

/// The means by which a leg (or a whole trip) is travelled.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum TransportMode {
    /// On foot.
    Walk,
    /// Private vehicle.
    Car,
    /// Bicycle.
    Bike,
    /// Generic scheduled public transport.
    Pt,
    /// Rail, routed by the transit router.
    Train,
    /// The teleportation leg into the station (`"prleg"`).
    TeleportLeg,
    /// Composite main mode of a teleport-and-ride trip (`"pAr"`).
    TeleportMain,
    /// Any other label registered by the host framework.
    Other(Arc<str>),
}

impl TransportMode {
    /// Label used in configuration and routing-module bindings.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Walk         => "walk",
            TransportMode::Car          => "car",
            TransportMode::Bike         => "bike",
            TransportMode::Pt           => "pt",
            TransportMode::Train        => "train",
            TransportMode::TeleportLeg  => "prleg",
            TransportMode::TeleportMain => "pAr",
            TransportMode::Other(label) => label,
        }
    }

    /// `true` for scheduled public-transport modes.
    #[inline]
    pub fn is_transit(&self) -> bool {
        matches!(self.as_str(), "pt" | "train")
    }
}

impl PartialEq for TransportMode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TransportMode {}

impl Hash for TransportMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for TransportMode {
    fn from(label: &str) -> Self {
        match label.trim() {
            "walk"  => TransportMode::Walk,
            "car"   => TransportMode::Car,
            "bike"  => TransportMode::Bike,
            "pt"    => TransportMode::Pt,
            "train" => TransportMode::Train,
            "prleg" => TransportMode::TeleportLeg,
            "pAr"   => TransportMode::TeleportMain,
            other   => TransportMode::Other(Arc::from(other)),
        }
    }
}

impl From<String> for TransportMode {
    fn from(label: String) -> Self {
        TransportMode::from(label.as_str())
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> String {
        mode.as_str().to_owned()
    }
}

impl FromStr for TransportMode {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TransportMode::from(s))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
