//! The `PlanStrategy` trait and the no-op strategy.

use mstr_core::{AgentId, AgentRng};
use mstr_plan::{PlanElement, Trip};
use mstr_router::{FacilityRef, RoutingRequest};

use crate::{ReplanError, ReplanResult};

/// Mutates one agent's day plan between iterations.
///
/// # Thread safety
///
/// Strategies are shared by all replanning workers and must be
/// `Send + Sync`.  Randomness comes only from the per-agent [`AgentRng`], so
/// the outcome for an agent does not depend on which worker runs it.
///
/// # Errors
///
/// On error the plan may have been partly rewritten; callers that need the
/// old plan back keep a copy.
pub trait PlanStrategy: Send + Sync {
    fn replan(
        &self,
        agent: AgentId,
        plan:  &mut Vec<PlanElement>,
        rng:   &mut AgentRng,
    ) -> ReplanResult<()>;
}

/// Keeps the plan as it is.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeepSelected;

impl PlanStrategy for KeepSelected {
    #[inline]
    fn replan(
        &self,
        _agent: AgentId,
        _plan:  &mut Vec<PlanElement>,
        _rng:   &mut AgentRng,
    ) -> ReplanResult<()> {
        Ok(())
    }
}

/// The request that routes `trip` (number `index` in its plan) again.
pub(crate) fn trip_request(agent: AgentId, index: usize, trip: &Trip<'_>) -> ReplanResult<RoutingRequest> {
    let departure = trip
        .departure_time()
        .ok_or(ReplanError::MissingDepartureTime { trip: index })?;
    let from = FacilityRef { link_id: trip.origin.link_id.clone(), coord: trip.origin.coord };
    let to = FacilityRef {
        link_id: trip.destination.link_id.clone(),
        coord:   trip.destination.coord,
    };
    Ok(RoutingRequest::new(from, to, departure).for_agent(agent))
}
