//! Main-mode classification of routed trips.
//!
//! Replanning needs to know which routing module produced a trip so it can
//! route it again the same way.  A trip holds legs of several modes (walk
//! access, a transit stage, walk egress); the identifier picks the one that
//! names the trip.

use std::sync::Arc;

use mstr_core::{TELEPORT_LEG_MODE, TELEPORT_MAIN_MODE, TransportMode};
use mstr_plan::Itinerary;

/// Maps an itinerary to the main mode it was routed with.
pub trait MainModeIdentifier: Send + Sync {
    fn identify(&self, trip: &Itinerary) -> TransportMode;
}

impl<T: MainModeIdentifier + ?Sized> MainModeIdentifier for Arc<T> {
    #[inline]
    fn identify(&self, trip: &Itinerary) -> TransportMode {
        (**self).identify(trip)
    }
}

// ── DefaultMainModeIdentifier ─────────────────────────────────────────────────

/// Picks the highest-ranked leg mode:
///
/// | Rank | Modes                      |
/// |------|----------------------------|
/// | 4    | `train`, `pt`              |
/// | 3    | `car`                      |
/// | 2    | `bike`                     |
/// | 1    | anything else              |
/// | 0    | `walk`                     |
///
/// Ties go to the earlier leg.  A trip without legs is a walk.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultMainModeIdentifier;

impl DefaultMainModeIdentifier {
    fn rank(mode: &TransportMode) -> u8 {
        match mode.as_str() {
            "train" | "pt" => 4,
            "car"          => 3,
            "bike"         => 2,
            "walk"         => 0,
            _              => 1,
        }
    }
}

impl MainModeIdentifier for DefaultMainModeIdentifier {
    fn identify(&self, trip: &Itinerary) -> TransportMode {
        let mut best: Option<&TransportMode> = None;
        for leg in trip.legs() {
            if best.is_none_or(|b| Self::rank(&leg.mode) > Self::rank(b)) {
                best = Some(&leg.mode);
            }
        }
        best.cloned().unwrap_or(TransportMode::Walk)
    }
}

// ── CompositeModeClassifier ───────────────────────────────────────────────────

/// Recognizes teleport-station trips and defers everything else.
///
/// A trip containing any `prleg` leg is `pAr`, whatever else it contains;
/// otherwise the fallback's answer is returned unchanged.
#[derive(Clone, Debug, Default)]
pub struct CompositeModeClassifier<F> {
    fallback: F,
}

impl<F: MainModeIdentifier> CompositeModeClassifier<F> {
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<F: MainModeIdentifier> MainModeIdentifier for CompositeModeClassifier<F> {
    fn identify(&self, trip: &Itinerary) -> TransportMode {
        if trip.legs().any(|leg| leg.mode == TELEPORT_LEG_MODE) {
            return TELEPORT_MAIN_MODE;
        }
        self.fallback.identify(trip)
    }
}
