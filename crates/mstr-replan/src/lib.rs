//! `mstr-replan` — plan strategies built on main-mode classification.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`strategy`]    | `PlanStrategy` trait, `KeepSelected`                       |
//! | [`reroute`]     | `ReRoute` — every trip again under its own main mode       |
//! | [`change_mode`] | `ChangeTripMode` — one trip to a different main mode       |
//! | [`error`]       | `ReplanError`, `ReplanResult<T>`                           |
//!
//! # Design notes
//!
//! Strategies see a trip only as the elements between two main activities.
//! Which routing module produced it is recovered with a
//! [`MainModeIdentifier`][mstr_router::MainModeIdentifier], and the trip is
//! routed again through the [`TripRouter`][mstr_router::TripRouter] entry for
//! that mode.  Running the strategy over many agents (and the iteration loop
//! around it) is left to the caller.

pub mod change_mode;
pub mod error;
pub mod reroute;
pub mod strategy;


pub use change_mode::ChangeTripMode;
pub use error::{ReplanError, ReplanResult};
pub use reroute::ReRoute;
pub use strategy::{KeepSelected, PlanStrategy};
