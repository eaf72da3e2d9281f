//! `mstr-plan` — itinerary data model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`element`]   | `PlanElement`, `Activity`, `Leg`, `Route`                 |
//! | [`itinerary`] | `Itinerary` — ordered elements + chaining check           |
//! | [`factory`]   | `PlanFactory` trait, `DefaultPlanFactory`                 |
//! | [`trip`]      | `Trip`, `trips`, `replace_trip`, stage-activity helpers   |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                              |
//!
//! # Chaining model (summary)
//!
//! An itinerary alternates legs and activities.  Wherever a leg meets an
//! activity the shared link must agree:
//!
//! ```text
//! Leg(a → b)  Activity(@b)  Leg(b → c)
//!         └──────┘   └──────┘
//! ```
//!
//! `Itinerary::check_chaining` reports the first place this breaks.

pub mod element;
pub mod error;
pub mod factory;
pub mod itinerary;
pub mod trip;


pub use element::{Activity, Leg, PlanElement, Route};
pub use error::{PlanError, PlanResult};
pub use factory::{DefaultPlanFactory, PlanFactory};
pub use itinerary::Itinerary;
pub use trip::{Trip, is_stage_activity, replace_trip, trips};
