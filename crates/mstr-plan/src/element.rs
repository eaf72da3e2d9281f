//! Core itinerary types: `Route`, `Activity`, `Leg`, and `PlanElement`.
//!
//! A plan element is either a stay ([`Activity`]) or a movement ([`Leg`]).
//! Code that walks an itinerary matches on [`PlanElement`] exhaustively;
//! there is no third kind of element to forget about.

use mstr_core::{Coord, Duration, LinkId, Time, TransportMode};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The realized path of one leg, reduced to its endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub start_link:  LinkId,
    pub end_link:    LinkId,
    pub travel_time: Duration,
    /// Travelled distance in metres, when the router knows it.
    pub distance:    Option<f64>,
}

impl Route {
    /// A route between two links with zero travel time and unknown distance.
    pub fn new(start_link: LinkId, end_link: LinkId) -> Self {
        Self { start_link, end_link, travel_time: Duration::ZERO, distance: None }
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// A stay at a location.
///
/// Main activities (home, work, …) usually carry an `end_time`; stage
/// activities inside a trip carry a `max_duration` instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub kind:         String,
    pub link_id:      LinkId,
    pub coord:        Option<Coord>,
    pub max_duration: Option<Duration>,
    pub end_time:     Option<Time>,
}

impl Activity {
    pub fn new(kind: impl Into<String>, link_id: LinkId) -> Self {
        Self {
            kind: kind.into(),
            link_id,
            coord: None,
            max_duration: None,
            end_time: None,
        }
    }

    pub fn with_coord(mut self, coord: Coord) -> Self {
        self.coord = Some(coord);
        self
    }

    pub fn with_end_time(mut self, end_time: Time) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// A movement between two locations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub mode:           TransportMode,
    pub departure_time: Time,
    pub travel_time:    Duration,
    pub route:          Route,
}

impl Leg {
    pub fn new(mode: TransportMode, departure_time: Time, route: Route) -> Self {
        Self { mode, departure_time, travel_time: route.travel_time, route }
    }

    /// Departure time plus travel time.
    #[inline]
    pub fn arrival_time(&self) -> Time {
        self.departure_time + self.travel_time
    }
}

// ── PlanElement ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

impl PlanElement {
    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            PlanElement::Leg(leg) => Some(leg),
            PlanElement::Activity(_) => None,
        }
    }

    pub fn as_leg_mut(&mut self) -> Option<&mut Leg> {
        match self {
            PlanElement::Leg(leg) => Some(leg),
            PlanElement::Activity(_) => None,
        }
    }

    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            PlanElement::Activity(act) => Some(act),
            PlanElement::Leg(_) => None,
        }
    }

    pub fn is_leg(&self) -> bool {
        matches!(self, PlanElement::Leg(_))
    }

    /// Link where this element begins: the activity's link, or the leg's start link.
    pub fn start_link(&self) -> &LinkId {
        match self {
            PlanElement::Activity(act) => &act.link_id,
            PlanElement::Leg(leg) => &leg.route.start_link,
        }
    }

    /// Link where this element ends: the activity's link, or the leg's end link.
    pub fn end_link(&self) -> &LinkId {
        match self {
            PlanElement::Activity(act) => &act.link_id,
            PlanElement::Leg(leg) => &leg.route.end_link,
        }
    }
}

impl From<Activity> for PlanElement {
    fn from(act: Activity) -> Self {
        PlanElement::Activity(act)
    }
}

impl From<Leg> for PlanElement {
    fn from(leg: Leg) -> Self {
        PlanElement::Leg(leg)
    }
}
