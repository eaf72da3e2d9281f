//! Construction hook for itinerary elements.
//!
//! Routing modules never build `Activity`/`Leg`/`Route` values with struct
//! literals; they ask the factory injected by the host.  A host that attaches
//! extra defaults to every element (a coordinate lookup, a distance
//! estimate, …) implements this trait instead of patching each router.

use mstr_core::{LinkId, Time, TransportMode};

use crate::{Activity, Leg, Route};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Creates the plan elements a routing module emits.
///
/// # Contract
///
/// - Must not block or perform I/O.
/// - Implementations must be `Send + Sync` (shared by concurrent routers).
pub trait PlanFactory: Send + Sync {
    /// An activity of `kind` located on `link`, with no timing attributes.
    fn create_activity_from_link(&self, kind: &str, link: LinkId) -> Activity;

    /// A leg of `mode` departing at `departure_time` along `route`.
    /// The leg's travel time is taken from the route.
    fn create_leg(&self, mode: TransportMode, departure_time: Time, route: Route) -> Leg;

    /// A route from `start` to `end` with zero travel time.
    fn create_route(&self, start: LinkId, end: LinkId) -> Route;
}

// ── Default ───────────────────────────────────────────────────────────────────

/// Builds plain elements with no extra attributes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPlanFactory;

impl PlanFactory for DefaultPlanFactory {
    #[inline]
    fn create_activity_from_link(&self, kind: &str, link: LinkId) -> Activity {
        Activity::new(kind, link)
    }

    #[inline]
    fn create_leg(&self, mode: TransportMode, departure_time: Time, route: Route) -> Leg {
        Leg::new(mode, departure_time, route)
    }

    #[inline]
    fn create_route(&self, start: LinkId, end: LinkId) -> Route {
        Route::new(start, end)
    }
}

impl<F: PlanFactory + ?Sized> PlanFactory for std::sync::Arc<F> {
    #[inline]
    fn create_activity_from_link(&self, kind: &str, link: LinkId) -> Activity {
        (**self).create_activity_from_link(kind, link)
    }

    #[inline]
    fn create_leg(&self, mode: TransportMode, departure_time: Time, route: Route) -> Leg {
        (**self).create_leg(mode, departure_time, route)
    }

    #[inline]
    fn create_route(&self, start: LinkId, end: LinkId) -> Route {
        (**self).create_route(start, end)
    }
}
