//! Routing inputs: the request, its endpoints, and the teleport station.

use mstr_core::{AgentId, Coord, FacilityId, LinkId, Time};

// ── FacilityRef ───────────────────────────────────────────────────────────────

/// Where a trip starts or ends: the network link, plus the coordinate when
/// the caller knows it (beeline routers need it; network routers do not).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityRef {
    pub link_id: LinkId,
    pub coord:   Option<Coord>,
}

impl FacilityRef {
    pub fn on_link(link_id: impl Into<LinkId>) -> Self {
        Self { link_id: link_id.into(), coord: None }
    }

    pub fn at(link_id: impl Into<LinkId>, coord: Coord) -> Self {
        Self { link_id: link_id.into(), coord: Some(coord) }
    }
}

// ── RoutingRequest ────────────────────────────────────────────────────────────

/// One trip to route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingRequest {
    pub from:           FacilityRef,
    pub to:             FacilityRef,
    pub departure_time: Time,
    /// The traveller, when routing on behalf of a specific agent.
    pub agent:          Option<AgentId>,
}

impl RoutingRequest {
    pub fn new(from: FacilityRef, to: FacilityRef, departure_time: Time) -> Self {
        Self { from, to, departure_time, agent: None }
    }

    /// Shorthand for a request between two links with no coordinates.
    pub fn between_links(from: impl Into<LinkId>, to: impl Into<LinkId>, departure_time: Time) -> Self {
        Self::new(FacilityRef::on_link(from), FacilityRef::on_link(to), departure_time)
    }

    pub fn for_agent(mut self, agent: AgentId) -> Self {
        self.agent = Some(agent);
        self
    }

    #[inline]
    pub fn from_link(&self) -> &LinkId {
        &self.from.link_id
    }

    #[inline]
    pub fn to_link(&self) -> &LinkId {
        &self.to.link_id
    }
}

// ── Anchor ────────────────────────────────────────────────────────────────────

/// The teleportation station: a fixed facility on a network link.
///
/// Built once at start-up and shared read-only (behind an `Arc`) by every
/// component that references it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub id:      FacilityId,
    pub link_id: LinkId,
    /// Usually the from-node coordinate of `link_id`.
    pub coord:   Coord,
}

impl Anchor {
    /// A station facility placed on `link_id`.
    pub fn on_link(id: impl Into<FacilityId>, link_id: impl Into<LinkId>, coord: Coord) -> Self {
        Self { id: id.into(), link_id: link_id.into(), coord }
    }

    /// The station as a routing endpoint.
    pub fn as_facility(&self) -> FacilityRef {
        FacilityRef::at(self.link_id.clone(), self.coord)
    }
}
