//! Moving one random trip to a different main mode.

use std::sync::Arc;

use mstr_core::{AgentId, AgentRng, RoutingConfig, TransportMode};
use mstr_plan::{PlanElement, replace_trip, trips};
use mstr_router::{MainModeIdentifier, TripRouter};

use crate::strategy::trip_request;
use crate::{PlanStrategy, ReplanError, ReplanResult};

/// Picks one trip uniformly, then a new main mode uniformly among the
/// change modes other than the trip's current one, and routes the trip with
/// it.
///
/// A plan without trips is left unchanged.  If the change modes offer no
/// alternative the plan is left unchanged and
/// [`ReplanError::NoAlternativeMode`] is returned.
pub struct ChangeTripMode<I: MainModeIdentifier> {
    router:       Arc<TripRouter>,
    identifier:   I,
    change_modes: Vec<TransportMode>,
}

impl<I: MainModeIdentifier> ChangeTripMode<I> {
    pub fn new(router: Arc<TripRouter>, identifier: I, change_modes: Vec<TransportMode>) -> Self {
        Self { router, identifier, change_modes }
    }

    pub fn from_config(router: Arc<TripRouter>, identifier: I, config: &RoutingConfig) -> Self {
        Self::new(router, identifier, config.change_modes.clone())
    }

    pub fn change_modes(&self) -> &[TransportMode] {
        &self.change_modes
    }
}

impl<I: MainModeIdentifier> PlanStrategy for ChangeTripMode<I> {
    fn replan(
        &self,
        agent: AgentId,
        plan:  &mut Vec<PlanElement>,
        rng:   &mut AgentRng,
    ) -> ReplanResult<()> {
        let (index, current, request) = {
            let all = trips(plan);
            let Some(index) = rng.gen_index(all.len()) else {
                return Ok(());
            };
            let trip = &all[index];
            let current = self.identifier.identify(&trip.to_itinerary());
            (index, current, trip_request(agent, index, trip)?)
        };

        let alternatives: Vec<&TransportMode> =
            self.change_modes.iter().filter(|m| **m != current).collect();
        let new_mode = rng
            .choose(&alternatives)
            .copied()
            .ok_or_else(|| ReplanError::NoAlternativeMode(current.clone()))?;

        let itinerary = self.router.calc_route(new_mode, &request)?;
        log::debug!("{agent}: trip {index} changed from {current} to {new_mode}");
        replace_trip(plan, index, itinerary)?;
        Ok(())
    }
}
