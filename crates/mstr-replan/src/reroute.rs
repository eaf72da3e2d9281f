//! Re-routing every trip of a plan under its own main mode.
//!
//! The main mode comes from a [`MainModeIdentifier`].  With a
//! [`CompositeModeClassifier`][mstr_router::CompositeModeClassifier] a
//! teleport-station trip is recognized as `pAr` and re-composed as a whole,
//! instead of having its inner train stage re-routed on its own.

use std::sync::Arc;

use mstr_core::{AgentId, AgentRng};
use mstr_plan::{PlanElement, replace_trip, trips};
use mstr_router::{MainModeIdentifier, TripRouter};

use crate::strategy::trip_request;
use crate::{PlanStrategy, ReplanResult};

pub struct ReRoute<I: MainModeIdentifier> {
    router:     Arc<TripRouter>,
    identifier: I,
}

impl<I: MainModeIdentifier> ReRoute<I> {
    pub fn new(router: Arc<TripRouter>, identifier: I) -> Self {
        Self { router, identifier }
    }
}

impl<I: MainModeIdentifier> PlanStrategy for ReRoute<I> {
    fn replan(
        &self,
        agent: AgentId,
        plan:  &mut Vec<PlanElement>,
        _rng:  &mut AgentRng,
    ) -> ReplanResult<()> {
        // Requests are built up front; replacing a trip shifts later indices.
        let jobs = trips(plan)
            .iter()
            .enumerate()
            .map(|(i, trip)| {
                let mode = self.identifier.identify(&trip.to_itinerary());
                trip_request(agent, i, trip).map(|request| (mode, request))
            })
            .collect::<ReplanResult<Vec<_>>>()?;

        for (i, (mode, request)) in jobs.iter().enumerate() {
            let itinerary = self.router.calc_route(mode, request)?;
            log::trace!("{agent}: re-routed trip {i} as {mode} ({} elements)", itinerary.len());
            replace_trip(plan, i, itinerary)?;
        }
        Ok(())
    }
}
