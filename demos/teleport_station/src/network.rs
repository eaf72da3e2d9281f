//! A synthetic rail line and a scripted transit router over it.
//!
//! ```text
//!   S (0 m) ──────── C (3 km) ──────── E (6 km)
//! station         central            east
//! ```
//!
//! Every transit trip walks to the stop nearest the origin, rides to `C`,
//! rides on to the stop nearest the destination and walks from there.

use mstr_core::{Coord, Duration, LinkId, TeleportedModeParams, Time, TransportMode};
use mstr_plan::{Activity, Itinerary, Leg, Route};
use mstr_router::{
    FacilityRef, RoutingError, RoutingModule, RoutingRequest, RoutingResult, TeleportedModeRouter,
};

pub const STATION_LINK: &str = "S";
const HUB_LINK:         &str = "C";
const TRAIN_SPEED_MPS:  f64  = 20.0;

pub fn station_coord() -> Coord {
    Coord::new(0.0, 0.0)
}

/// Access, two train stages via the hub, and egress.
pub struct ScriptedTransit {
    walk:  TeleportedModeRouter,
    stops: Vec<(LinkId, Coord)>,
}

impl ScriptedTransit {
    pub fn new(walk: TeleportedModeParams) -> Self {
        let stops = vec![
            (LinkId::new(STATION_LINK), station_coord()),
            (LinkId::new(HUB_LINK), Coord::new(3_000.0, 0.0)),
            (LinkId::new("E"), Coord::new(6_000.0, 0.0)),
        ];
        Self { walk: TeleportedModeRouter::new(walk), stops }
    }

    fn nearest_stop(&self, at: Coord) -> Option<&(LinkId, Coord)> {
        self.stops
            .iter()
            .min_by(|a, b| a.1.distance(at).total_cmp(&b.1.distance(at)))
    }

    fn hub(&self) -> &(LinkId, Coord) {
        &self.stops[1]
    }

    fn walk(&self, from: FacilityRef, to: FacilityRef, depart: Time, trip: &mut Itinerary) -> RoutingResult<Time> {
        let walk = self.walk.calc_route(&RoutingRequest::new(from, to, depart))?;
        let arrival = depart + walk.travel_time();
        for element in walk {
            trip.push(element);
        }
        Ok(arrival)
    }

    fn ride(&self, from: &(LinkId, Coord), to: &(LinkId, Coord), depart: Time, trip: &mut Itinerary) -> Time {
        let distance = from.1.distance(to.1);
        let mut route = Route::new(from.0.clone(), to.0.clone());
        route.travel_time = Duration::from_secs_ceil(distance / TRAIN_SPEED_MPS);
        route.distance = Some(distance);
        let leg = Leg::new(TransportMode::Train, depart, route);
        let arrival = leg.arrival_time();
        trip.push(leg);
        arrival
    }
}

impl RoutingModule for ScriptedTransit {
    fn calc_route(&self, request: &RoutingRequest) -> RoutingResult<Itinerary> {
        let no_route = || RoutingError::NoRoute {
            from: request.from.link_id.clone(),
            to:   request.to.link_id.clone(),
            mode: TransportMode::Train,
        };
        let (Some(from), Some(to)) = (request.from.coord, request.to.coord) else {
            return Err(no_route());
        };
        let board = self.nearest_stop(from).ok_or_else(no_route)?;
        let alight = self.nearest_stop(to).ok_or_else(no_route)?;
        let hub = self.hub();
        if board.0 == hub.0 || alight.0 == hub.0 {
            return Err(no_route());
        }

        let mut trip = Itinerary::new();
        let mut t = self.walk(
            request.from.clone(),
            FacilityRef::at(board.0.clone(), board.1),
            request.departure_time,
            &mut trip,
        )?;
        trip.push(Activity::new("pt interaction", board.0.clone()).with_max_duration(Duration::ZERO));
        t = self.ride(board, hub, t, &mut trip);
        t = self.ride(hub, alight, t, &mut trip);
        trip.push(Activity::new("pt interaction", alight.0.clone()).with_max_duration(Duration::ZERO));
        self.walk(FacilityRef::at(alight.0.clone(), alight.1), request.to.clone(), t, &mut trip)?;
        Ok(trip)
    }
}
