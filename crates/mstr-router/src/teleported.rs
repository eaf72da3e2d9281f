//! Beeline routing for teleported modes.
//!
//! Modes without a network representation (walking, typically) are routed
//! as a single straight-line leg:
//!
//! ```text
//! distance    = |from − to| × beeline_distance_factor
//! travel_time = ⌈distance / speed_mps⌉
//! ```
//!
//! The factor stretches the beeline towards a realistic network distance;
//! 1.3 is the usual value for walking in a street grid.

use mstr_core::{Duration, TeleportedModeParams};
use mstr_plan::{DefaultPlanFactory, Itinerary, PlanFactory};

use crate::{RoutingError, RoutingModule, RoutingRequest, RoutingResult};

/// Routes one teleported mode by beeline distance.
pub struct TeleportedModeRouter<F: PlanFactory = DefaultPlanFactory> {
    params:  TeleportedModeParams,
    factory: F,
}

impl TeleportedModeRouter<DefaultPlanFactory> {
    pub fn new(params: TeleportedModeParams) -> Self {
        Self::with_factory(params, DefaultPlanFactory)
    }
}

impl<F: PlanFactory> TeleportedModeRouter<F> {
    pub fn with_factory(params: TeleportedModeParams, factory: F) -> Self {
        Self { params, factory }
    }

    pub fn params(&self) -> &TeleportedModeParams {
        &self.params
    }
}

impl<F: PlanFactory> RoutingModule for TeleportedModeRouter<F> {
    fn calc_route(&self, request: &RoutingRequest) -> RoutingResult<Itinerary> {
        let from = request
            .from
            .coord
            .ok_or_else(|| RoutingError::MissingCoord(request.from.link_id.clone()))?;
        let to = request
            .to
            .coord
            .ok_or_else(|| RoutingError::MissingCoord(request.to.link_id.clone()))?;

        let distance = from.distance(to) * self.params.beeline_distance_factor;
        let travel_time = Duration::from_secs_ceil(distance / self.params.speed_mps);

        let mut route = self
            .factory
            .create_route(request.from.link_id.clone(), request.to.link_id.clone());
        route.travel_time = travel_time;
        route.distance = Some(distance);

        let mut leg = self
            .factory
            .create_leg(self.params.mode.clone(), request.departure_time, route);
        leg.travel_time = travel_time;

        let mut itinerary = Itinerary::new();
        itinerary.push(leg);
        Ok(itinerary)
    }
}
