//! `mstr-router` — routing modules, teleport-station composition, and
//! main-mode classification.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`request`]     | `RoutingRequest`, `FacilityRef`, `Anchor`                      |
//! | [`module`]      | `RoutingModule`, `RoutingModuleProvider`, `ModuleSlot`         |
//! | [`trip_router`] | `TripRouter` — main mode → routing module registry             |
//! | [`teleported`]  | `TeleportedModeRouter` — beeline routing for teleported modes  |
//! | [`composer`]    | `TripComposer`, `AnchorCheck`                                  |
//! | [`main_mode`]   | `MainModeIdentifier`, `DefaultMainModeIdentifier`, `CompositeModeClassifier` |
//! | [`error`]       | `RoutingError`, `RoutingResult<T>`                             |
//!
//! # Teleport-station trips
//!
//! ```text
//! request(from → to)
//!   │
//!   ├─ provider.get() ──► inner module (e.g. "train") ──► base sub-trip
//!   │                                                     │ reconcile endpoints
//!   ▼                                                     ▼
//! [prleg(from → station), pr interaction @station] ++ base
//! ```
//!
//! [`CompositeModeClassifier`] labels any itinerary containing the `prleg`
//! leg as `pAr`, so replanning re-routes the whole composite trip through
//! the [`TripComposer`] again rather than through its inner mode.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `TripRouter::calc_routes` runs on Rayon's thread pool.    |
//! | `fx-hash`  | FxHash instead of SipHash for the mode registry.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod composer;
pub mod error;
pub mod main_mode;
pub mod module;
pub mod request;
pub mod teleported;
pub mod trip_router;

#[cfg(test)]
mod tests;

pub use composer::{AnchorCheck, RECONCILED_LEG_INDEX, TripComposer};
pub use error::{RoutingError, RoutingResult};
pub use main_mode::{CompositeModeClassifier, DefaultMainModeIdentifier, MainModeIdentifier};
pub use module::{ModuleSlot, RoutingModule, RoutingModuleProvider};
pub use request::{Anchor, FacilityRef, RoutingRequest};
pub use teleported::TeleportedModeRouter;
pub use trip_router::TripRouter;
