use mstr_core::TransportMode;
use mstr_plan::PlanError;
use mstr_router::RoutingError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReplanError {
    #[error("re-routing failed: {0}")]
    Routing(#[from] RoutingError),

    #[error("plan structure error: {0}")]
    Plan(#[from] PlanError),

    #[error("no change mode available other than {0}")]
    NoAlternativeMode(TransportMode),

    #[error("trip {trip} has no departure time: origin has no end time and the trip has no legs")]
    MissingDepartureTime { trip: usize },
}

pub type ReplanResult<T> = Result<T, ReplanError>;
