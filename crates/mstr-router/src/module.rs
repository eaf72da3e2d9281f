//! The routing-module seam and late-bound module providers.
//!
//! # Pluggability
//!
//! Everything that turns a [`RoutingRequest`] into an [`Itinerary`]
//! implements [`RoutingModule`]: transit routers supplied by the host, the
//! beeline [`TeleportedModeRouter`][crate::TeleportedModeRouter], and the
//! [`TripComposer`][crate::TripComposer] itself.
//!
//! # Fresh resolution
//!
//! A module that delegates to another one holds a [`RoutingModuleProvider`],
//! never the delegate itself, and calls [`get`][RoutingModuleProvider::get]
//! on every request.  The host may bind or decorate the delegate *after* the
//! composing module was built (modes are typically wired in any order at
//! start-up) and every request sees the current binding.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use mstr_core::TransportMode;
use mstr_plan::Itinerary;

use crate::{RoutingError, RoutingRequest, RoutingResult};

// ── RoutingModule ─────────────────────────────────────────────────────────────

/// Computes the itinerary of one trip.
///
/// # Contract
///
/// - A returned itinerary starts at `request.from` and ends at `request.to`.
/// - Failure ("no route") is reported as an error, never as an empty itinerary.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; routers are shared by all workers
/// routing independent agents.
pub trait RoutingModule: Send + Sync {
    fn calc_route(&self, request: &RoutingRequest) -> RoutingResult<Itinerary>;
}

// ── Providers ─────────────────────────────────────────────────────────────────

/// Resolves the routing module to use *for this request*.
pub trait RoutingModuleProvider: Send + Sync {
    fn get(&self) -> RoutingResult<Arc<dyn RoutingModule>>;
}

/// Any thread-safe closure returning a module is a provider.
impl<F> RoutingModuleProvider for F
where
    F: Fn() -> Arc<dyn RoutingModule> + Send + Sync,
{
    #[inline]
    fn get(&self) -> RoutingResult<Arc<dyn RoutingModule>> {
        Ok(self())
    }
}

// ── ModuleSlot ────────────────────────────────────────────────────────────────

/// A named, rebindable binding for one mode.
///
/// Clones share the same binding: [`bind`](Self::bind) on any clone is seen
/// by every other clone on its next [`get`](RoutingModuleProvider::get).
/// Resolving an empty slot fails with [`RoutingError::UnboundMode`].
#[derive(Clone)]
pub struct ModuleSlot {
    mode:   TransportMode,
    module: Arc<RwLock<Option<Arc<dyn RoutingModule>>>>,
}

impl ModuleSlot {
    /// A slot for `mode` with nothing bound yet.
    pub fn empty(mode: TransportMode) -> Self {
        Self { mode, module: Arc::new(RwLock::new(None)) }
    }

    pub fn mode(&self) -> &TransportMode {
        &self.mode
    }

    /// Bind `module`, returning the previous binding if there was one.
    pub fn bind(&self, module: Arc<dyn RoutingModule>) -> Option<Arc<dyn RoutingModule>> {
        // A panic while holding the lock cannot leave the Option half-written.
        let mut slot = self.module.write().unwrap_or_else(PoisonError::into_inner);
        slot.replace(module)
    }

    pub fn is_bound(&self) -> bool {
        self.module
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl RoutingModuleProvider for ModuleSlot {
    fn get(&self) -> RoutingResult<Arc<dyn RoutingModule>> {
        let slot = self.module.read().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(module) => {
                log::trace!("resolved routing module for mode {}", self.mode);
                Ok(Arc::clone(module))
            }
            None => Err(RoutingError::UnboundMode(self.mode.clone())),
        }
    }
}

impl fmt::Debug for ModuleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSlot")
            .field("mode", &self.mode)
            .field("bound", &self.is_bound())
            .finish()
    }
}
