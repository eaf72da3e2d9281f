use mstr_core::LinkId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("broken chain at element {index}: expected link {expected}, found {found}")]
    BrokenChain {
        index:    usize,
        expected: LinkId,
        found:    LinkId,
    },

    #[error("trip {index} out of range ({count} trips in plan)")]
    TripOutOfRange { index: usize, count: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
