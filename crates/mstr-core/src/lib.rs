//! `mstr-core` — foundational types for multi-stage trip routing.
//!
//! This crate is a dependency of every other `mstr-*` crate.  It intentionally
//! has no `mstr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `LinkId`, `FacilityId`                     |
//! | [`geo`]         | `Coord`, Euclidean distance                           |
//! | [`time`]        | `Time`, `Duration`                                    |
//! | [`transport`]   | `TransportMode`, shared teleportation constants       |
//! | [`config`]      | `RoutingConfig`, `TeleportedModeParams`               |
//! | [`rng`]         | `AgentRng` (per-agent)                                |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                          |
//! |---------|-----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (JSON configs).   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RoutingConfig, TeleportedModeParams};
pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use ids::{AgentId, FacilityId, LinkId};
pub use rng::AgentRng;
pub use time::{Duration, Time};
pub use transport::{STAGE_ACTIVITY, TELEPORT_LEG_MODE, TELEPORT_MAIN_MODE, TransportMode};
