//! Routing error type.

use mstr_core::{LinkId, TransportMode};
use mstr_plan::PlanError;
use thiserror::Error;

/// Errors produced by routing modules and the trip router.
///
/// A [`TripComposer`][crate::TripComposer] passes the errors of its inner
/// module through untouched; only `StructuralPrecondition` and
/// `AnchorMismatch` originate in the composer itself.
#[derive(Debug, Error, PartialEq)]
pub enum RoutingError {
    #[error("no {mode} route from link {from} to link {to}")]
    NoRoute {
        from: LinkId,
        to:   LinkId,
        mode: TransportMode,
    },

    #[error("no routing module bound for mode {0}")]
    UnboundMode(TransportMode),

    #[error("link {0} has no coordinate; cannot compute a beeline")]
    MissingCoord(LinkId),

    #[error("inner trip has {len} elements; teleport-station composition requires at least {required}")]
    StructuralPrecondition { len: usize, required: usize },

    #[error("inner trip starts at link {found}, not at the station link {expected}")]
    AnchorMismatch { expected: LinkId, found: LinkId },

    #[error("plan structure error: {0}")]
    Plan(#[from] PlanError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
