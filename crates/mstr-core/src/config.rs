//! Routing configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to the router and replanning strategies.
//! Missing fields fall back to [`RoutingConfig::default`], which reproduces
//! the teleport-station scenario tuning:
//!
//! | Setting              | Default                        |
//! |----------------------|--------------------------------|
//! | `teleported_modes`   | walk @ 5 km/h, beeline × 1.3   |
//! | `change_modes`       | car, train, pAr                |
//! | `access_mode`        | walk                           |
//! | `transit_mode`       | train                          |
//! | `enforce_anchor_link`| `false` (log a warning instead)|

use crate::{CoreError, CoreResult, TELEPORT_MAIN_MODE, TransportMode};

/// Parameters of a mode routed as a straight-line teleport.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportedModeParams {
    pub mode: TransportMode,
    /// Speed along the (stretched) beeline, metres per second.
    pub speed_mps: f64,
    /// Multiplier applied to the beeline distance to approximate the network path.
    pub beeline_distance_factor: f64,
}

impl TeleportedModeParams {
    pub fn new(mode: TransportMode, speed_mps: f64, beeline_distance_factor: f64) -> Self {
        Self { mode, speed_mps, beeline_distance_factor }
    }
}

/// Top-level routing configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RoutingConfig {
    /// Modes routed by beeline teleportation.
    pub teleported_modes: Vec<TeleportedModeParams>,

    /// Main modes a mode-change strategy may switch a trip between.
    pub change_modes: Vec<TransportMode>,

    /// Mode of the walk legs whose end link is normalized to the station.
    pub access_mode: TransportMode,

    /// Mode of the fixed-position transit leg whose end link is moved to the station.
    pub transit_mode: TransportMode,

    /// Fail composition when the inner trip does not start at the station
    /// link, instead of logging a warning.
    pub enforce_anchor_link: bool,

    /// Master seed for replanning RNGs.
    pub seed: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            teleported_modes: vec![TeleportedModeParams::new(TransportMode::Walk, 5.0 / 3.6, 1.3)],
            change_modes: vec![TransportMode::Car, TransportMode::Train, TELEPORT_MAIN_MODE],
            access_mode: TransportMode::Walk,
            transit_mode: TransportMode::Train,
            enforce_anchor_link: false,
            seed: 4711,
        }
    }
}

impl RoutingConfig {
    /// Teleportation parameters for `mode`, if it is routed by beeline.
    pub fn teleported(&self, mode: &TransportMode) -> Option<&TeleportedModeParams> {
        self.teleported_modes.iter().find(|p| &p.mode == mode)
    }

    /// Check internal consistency.  Call once after loading.
    pub fn validate(&self) -> CoreResult<()> {
        for (i, params) in self.teleported_modes.iter().enumerate() {
            if !(params.speed_mps.is_finite() && params.speed_mps > 0.0) {
                return Err(CoreError::Config(format!(
                    "teleported mode {}: speed_mps must be positive, got {}",
                    params.mode, params.speed_mps
                )));
            }
            if !(params.beeline_distance_factor.is_finite() && params.beeline_distance_factor > 0.0) {
                return Err(CoreError::Config(format!(
                    "teleported mode {}: beeline_distance_factor must be positive, got {}",
                    params.mode, params.beeline_distance_factor
                )));
            }
            if self.teleported_modes[..i].iter().any(|p| p.mode == params.mode) {
                return Err(CoreError::Config(format!(
                    "teleported mode {} configured twice",
                    params.mode
                )));
            }
        }

        if self.change_modes.is_empty() {
            return Err(CoreError::Config("change_modes must not be empty".into()));
        }
        if self.access_mode == self.transit_mode {
            return Err(CoreError::Config(format!(
                "access_mode and transit_mode must differ (both {})",
                self.access_mode
            )));
        }
        Ok(())
    }
}
