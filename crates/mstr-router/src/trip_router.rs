//! Main-mode registry of routing modules.

use std::sync::Arc;

use mstr_core::TransportMode;
use mstr_plan::Itinerary;

use crate::{ModuleSlot, RoutingError, RoutingModule, RoutingModuleProvider, RoutingRequest, RoutingResult};

#[cfg(feature = "fx-hash")]
type ModeMap<V> = rustc_hash::FxHashMap<TransportMode, V>;
#[cfg(not(feature = "fx-hash"))]
type ModeMap<V> = std::collections::HashMap<TransportMode, V>;

/// Registry of routing modules keyed by main mode.
///
/// Modules that delegate to another mode take a [`ModuleSlot`] from
/// [`provider`](Self::provider) before that mode is bound; the slot follows
/// every later [`bind`](Self::bind).
///
/// # Example
///
/// ```rust,ignore
/// let mut router = TripRouter::new();
/// let train = router.provider(TransportMode::Train);   // not bound yet
/// router.bind(TELEPORT_MAIN_MODE, Arc::new(TripComposer::new(train, DefaultPlanFactory, station)));
/// router.bind(TransportMode::Train, Arc::new(host_transit_router));
/// let trip = router.calc_route(&TELEPORT_MAIN_MODE, &request)?;
/// ```
#[derive(Debug, Default)]
pub struct TripRouter {
    slots:          ModeMap<ModuleSlot>,
    check_chaining: bool,
}

impl TripRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the chaining invariant of every routed itinerary and fail with
    /// [`RoutingError::Plan`] when it is broken.
    pub fn with_chain_check(mut self, enabled: bool) -> Self {
        self.check_chaining = enabled;
        self
    }

    /// The late-bound slot for `mode`, created empty if the mode is unknown.
    pub fn provider(&mut self, mode: TransportMode) -> ModuleSlot {
        self.slots
            .entry(mode.clone())
            .or_insert_with(|| ModuleSlot::empty(mode))
            .clone()
    }

    /// Bind (or rebind) the module routing trips of main mode `mode`.
    pub fn bind(&mut self, mode: TransportMode, module: Arc<dyn RoutingModule>) -> &mut Self {
        if self.provider(mode.clone()).bind(module).is_some() {
            log::debug!("rebound routing module for mode {mode}");
        }
        self
    }

    pub fn is_bound(&self, mode: &TransportMode) -> bool {
        self.slots.get(mode).is_some_and(ModuleSlot::is_bound)
    }

    /// Modes that currently have a module bound, in no particular order.
    pub fn modes(&self) -> impl Iterator<Item = &TransportMode> + '_ {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.is_bound())
            .map(|(mode, _)| mode)
    }

    /// Route `request` with the module bound to `mode`.
    pub fn calc_route(
        &self,
        mode:    &TransportMode,
        request: &RoutingRequest,
    ) -> RoutingResult<Itinerary> {
        let slot = self
            .slots
            .get(mode)
            .ok_or_else(|| RoutingError::UnboundMode(mode.clone()))?;
        let itinerary = slot.get()?.calc_route(request)?;
        if self.check_chaining {
            itinerary.check_chaining()?;
        }
        Ok(itinerary)
    }

    /// Route a batch of independent requests.
    ///
    /// Results are returned in input order.  With the `parallel` Cargo
    /// feature the batch runs on Rayon's thread pool.
    pub fn calc_routes(
        &self,
        jobs: &[(TransportMode, RoutingRequest)],
    ) -> Vec<RoutingResult<Itinerary>> {
        #[cfg(not(feature = "parallel"))]
        {
            jobs.iter()
                .map(|(mode, request)| self.calc_route(mode, request))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            jobs.par_iter()
                .map(|(mode, request)| self.calc_route(mode, request))
                .collect()
        }
    }
}
