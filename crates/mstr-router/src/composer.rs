//! Teleport-station trip composition.
//!
//! # Algorithm
//!
//! ```text
//! 1. base = provider.get()?.calc_route(request)?     (errors pass through)
//! 2. require base.len() ≥ 4
//! 3. pass A: walk legs ending on the station link → end_link = station link
//! 4. pass B: base[3], if a transit-mode leg         → end_link = station link
//! 5. [ prleg(from → station, 0 s), pr interaction @station (max 0 s) ] ++ base
//! ```
//!
//! Pass B addresses a fixed position: it assumes the inner router returns
//! at least an access leg, a stage activity and a transit stage before it.
//! The position is [`RECONCILED_LEG_INDEX`]; shorter inner trips are
//! rejected with [`RoutingError::StructuralPrecondition`].
//!
//! The composed trip only chains cleanly if the inner trip starts on the
//! station link.  [`AnchorCheck`] decides whether a trip that does not is
//! logged or rejected.

use std::sync::Arc;

use mstr_core::{Duration, RoutingConfig, STAGE_ACTIVITY, TELEPORT_LEG_MODE, TransportMode};
use mstr_plan::{DefaultPlanFactory, Itinerary, PlanElement, PlanFactory};

use crate::{Anchor, RoutingError, RoutingModule, RoutingModuleProvider, RoutingRequest, RoutingResult};

/// Position in the inner trip of the transit leg whose end link is moved to
/// the station.
pub const RECONCILED_LEG_INDEX: usize = 3;

/// Shortest inner trip the composer accepts.
const MIN_INNER_TRIP_LEN: usize = RECONCILED_LEG_INDEX + 1;

/// What to do when the inner trip does not start on the station link.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AnchorCheck {
    /// Log a warning and return the composed trip.
    #[default]
    Warn,
    /// Fail with [`RoutingError::AnchorMismatch`].
    Enforce,
}

/// Routing module for the teleport-and-ride main mode.
///
/// Stateless after construction: the station is shared read-only and the
/// inner module is resolved through `P` on every request, so one composer
/// serves any number of concurrent callers.
pub struct TripComposer<P: RoutingModuleProvider, F: PlanFactory = DefaultPlanFactory> {
    delegate:     P,
    factory:      F,
    station:      Arc<Anchor>,
    access_mode:  TransportMode,
    transit_mode: TransportMode,
    anchor_check: AnchorCheck,
}

impl<P: RoutingModuleProvider, F: PlanFactory> TripComposer<P, F> {
    /// Compose on top of the module `delegate` resolves to, normalizing walk
    /// and train legs.
    pub fn new(delegate: P, factory: F, station: Arc<Anchor>) -> Self {
        Self {
            delegate,
            factory,
            station,
            access_mode:  TransportMode::Walk,
            transit_mode: TransportMode::Train,
            anchor_check: AnchorCheck::default(),
        }
    }

    /// Like [`new`](Self::new), taking modes and the anchor policy from `config`.
    pub fn from_config(delegate: P, factory: F, station: Arc<Anchor>, config: &RoutingConfig) -> Self {
        let anchor_check = if config.enforce_anchor_link {
            AnchorCheck::Enforce
        } else {
            AnchorCheck::Warn
        };
        Self::new(delegate, factory, station)
            .with_access_mode(config.access_mode.clone())
            .with_transit_mode(config.transit_mode.clone())
            .with_anchor_check(anchor_check)
    }

    pub fn with_access_mode(mut self, mode: TransportMode) -> Self {
        self.access_mode = mode;
        self
    }

    pub fn with_transit_mode(mut self, mode: TransportMode) -> Self {
        self.transit_mode = mode;
        self
    }

    pub fn with_anchor_check(mut self, check: AnchorCheck) -> Self {
        self.anchor_check = check;
        self
    }

    pub fn station(&self) -> &Anchor {
        &self.station
    }

    // ── Endpoint reconciliation ───────────────────────────────────────────

    /// Align the inner trip's endpoints with the station (passes A and B).
    ///
    /// Fails without touching `trip` if it is shorter than
    /// [`RECONCILED_LEG_INDEX`] + 1.  Applying it twice is the same as
    /// applying it once.
    pub fn reconcile_endpoints(&self, trip: &mut Itinerary) -> RoutingResult<()> {
        if trip.len() < MIN_INNER_TRIP_LEN {
            return Err(RoutingError::StructuralPrecondition {
                len:      trip.len(),
                required: MIN_INNER_TRIP_LEN,
            });
        }
        let station_link = &self.station.link_id;

        // Pass A: canonicalize access legs that already end at the station.
        for leg in trip.legs_mut() {
            if leg.mode == self.access_mode && leg.route.end_link == *station_link {
                leg.route.end_link = station_link.clone();
            }
        }

        // Pass B: the transit stage at the fixed position alights at the station.
        if let Some(PlanElement::Leg(leg)) = trip.get_mut(RECONCILED_LEG_INDEX) {
            if leg.mode == self.transit_mode {
                if leg.route.end_link != *station_link {
                    log::debug!(
                        "moving {} leg end from link {} to station link {station_link}",
                        leg.mode,
                        leg.route.end_link
                    );
                }
                leg.route.end_link = station_link.clone();
            }
        }
        Ok(())
    }

    fn check_anchor(&self, trip: &Itinerary) -> RoutingResult<()> {
        let Some(found) = trip.start_link() else {
            return Ok(());
        };
        let expected = &self.station.link_id;
        if found == expected {
            return Ok(());
        }
        match self.anchor_check {
            AnchorCheck::Warn => {
                log::warn!(
                    "inner trip starts at link {found}, not at station {} (link {expected}); \
                     composed trip will not chain",
                    self.station.id
                );
                Ok(())
            }
            AnchorCheck::Enforce => Err(RoutingError::AnchorMismatch {
                expected: expected.clone(),
                found:    found.clone(),
            }),
        }
    }
}

impl<P: RoutingModuleProvider, F: PlanFactory> RoutingModule for TripComposer<P, F> {
    fn calc_route(&self, request: &RoutingRequest) -> RoutingResult<Itinerary> {
        let mut trip = self.delegate.get()?.calc_route(request)?;
        self.reconcile_endpoints(&mut trip)?;
        self.check_anchor(&trip)?;

        let station_link = self.station.link_id.clone();

        let mut interaction = self
            .factory
            .create_activity_from_link(STAGE_ACTIVITY, station_link.clone());
        interaction.max_duration = Some(Duration::ZERO);
        trip.insert(0, interaction);

        let mut route = self
            .factory
            .create_route(request.from.link_id.clone(), station_link);
        route.travel_time = Duration::ZERO;
        let mut teleport = self
            .factory
            .create_leg(TELEPORT_LEG_MODE, request.departure_time, route);
        teleport.travel_time = Duration::ZERO;
        trip.insert(0, teleport);

        log::debug!(
            "composed teleport trip {} → {} via station {} ({} elements)",
            request.from.link_id,
            request.to.link_id,
            self.station.id,
            trip.len()
        );
        Ok(trip)
    }
}
