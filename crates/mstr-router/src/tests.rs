//! Unit tests for mstr-router.
//!
//! Inner routers are stubs that return scripted itineraries, so no network
//! is needed.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mstr_core::{Coord, LinkId, Time, TransportMode};
    use mstr_plan::{Activity, Itinerary, Leg, Route};

    use crate::{Anchor, RoutingError, RoutingModule, RoutingRequest, RoutingResult};

    pub const STATION_LINK: &str = "S";

    pub fn link(id: &str) -> LinkId {
        LinkId::new(id)
    }

    pub fn leg(mode: TransportMode, from: &str, to: &str) -> Leg {
        Leg::new(mode, Time::from_hms(8, 0, 0), Route::new(link(from), link(to)))
    }

    pub fn stage(on: &str) -> Activity {
        Activity::new("pt interaction", link(on))
    }

    pub fn station() -> Arc<Anchor> {
        Arc::new(Anchor::on_link("station", STATION_LINK, Coord::new(0.0, 0.0)))
    }

    pub fn request(from: &str, to: &str) -> RoutingRequest {
        RoutingRequest::between_links(from, to, Time::from_hms(8, 0, 0))
    }

    /// `[walk(A→S), pt interaction@S, train(S→B2), train(B2→X)]`, starting
    /// away from the station.
    pub fn base_from_home() -> Itinerary {
        let mut it = Itinerary::new();
        it.push(leg(TransportMode::Walk, "A", STATION_LINK));
        it.push(stage(STATION_LINK));
        it.push(leg(TransportMode::Train, STATION_LINK, "B2"));
        it.push(leg(TransportMode::Train, "B2", "X"));
        it
    }

    /// `[walk(S→S), pt interaction@S, train(S→B), train(B→X), walk(X→B)]`,
    /// starting on the station link.
    pub fn base_from_station() -> Itinerary {
        let mut it = Itinerary::new();
        it.push(leg(TransportMode::Walk, STATION_LINK, STATION_LINK));
        it.push(stage(STATION_LINK));
        it.push(leg(TransportMode::Train, STATION_LINK, "B"));
        it.push(leg(TransportMode::Train, "B", "X"));
        it.push(leg(TransportMode::Walk, "X", "B"));
        it
    }

    /// Returns a clone of a fixed itinerary and counts its calls.
    pub struct Scripted {
        pub trip:  Itinerary,
        pub calls: AtomicUsize,
    }

    impl Scripted {
        pub fn new(trip: Itinerary) -> Arc<Self> {
            Arc::new(Self { trip, calls: AtomicUsize::new(0) })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RoutingModule for Scripted {
        fn calc_route(&self, _request: &RoutingRequest) -> RoutingResult<Itinerary> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.trip.clone())
        }
    }

    /// Always fails with `NoRoute`.
    pub struct Unroutable;

    impl RoutingModule for Unroutable {
        fn calc_route(&self, request: &RoutingRequest) -> RoutingResult<Itinerary> {
            Err(RoutingError::NoRoute {
                from: request.from_link().clone(),
                to:   request.to_link().clone(),
                mode: TransportMode::Train,
            })
        }
    }
}

// ── Endpoint reconciliation ───────────────────────────────────────────────────

#[cfg(test)]
mod reconcile_tests {
    use mstr_core::{Time, TransportMode};
    use mstr_plan::{DefaultPlanFactory, Itinerary, PlanElement, Route};

    use super::helpers::*;
    use crate::{ModuleSlot, RECONCILED_LEG_INDEX, RoutingError, TripComposer};

    fn composer() -> TripComposer<ModuleSlot> {
        TripComposer::new(ModuleSlot::empty(TransportMode::Train), DefaultPlanFactory, station())
    }

    #[test]
    fn train_leg_at_index_three_ends_at_station() {
        let mut trip = base_from_home();
        composer().reconcile_endpoints(&mut trip).unwrap();
        let leg = trip.get(RECONCILED_LEG_INDEX).and_then(PlanElement::as_leg).unwrap();
        assert_eq!(leg.route.end_link, link(STATION_LINK));
        // Only the end link moves.
        assert_eq!(leg.route.start_link, link("B2"));
    }

    #[test]
    fn non_transit_leg_at_index_three_is_untouched() {
        let mut trip = base_from_home();
        *trip.get_mut(3).unwrap() = leg(TransportMode::Walk, "B2", "X").into();
        let before = trip.clone();
        composer().reconcile_endpoints(&mut trip).unwrap();
        assert_eq!(trip, before);
    }

    #[test]
    fn activity_at_index_three_is_untouched() {
        let mut trip = base_from_home();
        *trip.get_mut(3).unwrap() = stage("X").into();
        let before = trip.clone();
        composer().reconcile_endpoints(&mut trip).unwrap();
        assert_eq!(trip, before);
    }

    #[test]
    fn walk_legs_are_not_redirected() {
        let mut trip = base_from_station();
        composer().reconcile_endpoints(&mut trip).unwrap();
        // The egress walk ends at B, not at the station.
        assert_eq!(trip.end_link(), Some(&link("B")));
        assert_eq!(trip.get(0).unwrap().end_link(), &link(STATION_LINK));
    }

    #[test]
    fn only_index_three_is_reconciled() {
        let mut trip = base_from_home();
        trip.push(leg(TransportMode::Train, "X", "Y"));
        composer().reconcile_endpoints(&mut trip).unwrap();
        assert_eq!(trip.get(2).unwrap().end_link(), &link("B2"));
        assert_eq!(trip.get(4).unwrap().end_link(), &link("Y"));
    }

    #[test]
    fn short_trip_is_rejected_untouched() {
        for len in 0..RECONCILED_LEG_INDEX + 1 {
            let mut trip: Itinerary = base_from_home().into_iter().take(len).collect();
            let before = trip.clone();
            let result = composer().reconcile_endpoints(&mut trip);
            if len < 4 {
                assert_eq!(
                    result,
                    Err(RoutingError::StructuralPrecondition { len, required: 4 })
                );
                assert_eq!(trip, before);
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let mut once = base_from_home();
        composer().reconcile_endpoints(&mut once).unwrap();
        let mut twice = once.clone();
        composer().reconcile_endpoints(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn transit_mode_is_configurable() {
        let mut trip = base_from_home();
        *trip.get_mut(3).unwrap() = leg(TransportMode::Pt, "B2", "X").into();
        composer()
            .with_transit_mode(TransportMode::Pt)
            .reconcile_endpoints(&mut trip)
            .unwrap();
        assert_eq!(trip.get(3).unwrap().end_link(), &link(STATION_LINK));
    }

    #[test]
    fn reconciliation_keeps_leg_timing() {
        let mut trip = base_from_home();
        let mut route = Route::new(link("B2"), link("X"));
        route.travel_time = mstr_core::Duration::from_secs(600);
        *trip.get_mut(3).unwrap() =
            mstr_plan::Leg::new(TransportMode::Train, Time::from_hms(8, 10, 0), route).into();
        composer().reconcile_endpoints(&mut trip).unwrap();
        let leg = trip.get(3).and_then(PlanElement::as_leg).unwrap();
        assert_eq!(leg.departure_time, Time::from_hms(8, 10, 0));
        assert_eq!(leg.travel_time.secs(), 600);
    }
}

// ── TripComposer ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod composer_tests {
    use std::sync::Arc;

    use mstr_core::{
        Duration, RoutingConfig, STAGE_ACTIVITY, TELEPORT_LEG_MODE, TELEPORT_MAIN_MODE, Time,
        TransportMode,
    };
    use mstr_plan::{DefaultPlanFactory, PlanElement};

    use super::helpers::*;
    use crate::{
        AnchorCheck, CompositeModeClassifier, DefaultMainModeIdentifier, MainModeIdentifier,
        ModuleSlot, RoutingError, RoutingModule, TripComposer,
    };

    fn composer_over(inner: Arc<dyn RoutingModule>) -> TripComposer<ModuleSlot> {
        let slot = ModuleSlot::empty(TransportMode::Train);
        slot.bind(inner);
        TripComposer::new(slot, DefaultPlanFactory, station())
    }

    #[test_log::test]
    fn prepends_teleport_leg_and_interaction() {
        let inner = Scripted::new(base_from_station());
        let trip = composer_over(inner.clone()).calc_route(&request("A", "B")).unwrap();

        assert_eq!(trip.len(), inner.trip.len() + 2);

        let teleport = trip.get(0).and_then(PlanElement::as_leg).unwrap();
        assert_eq!(teleport.mode, TELEPORT_LEG_MODE);
        assert_eq!(teleport.route.start_link, link("A"));
        assert_eq!(teleport.route.end_link, link(STATION_LINK));
        assert_eq!(teleport.departure_time, Time::from_hms(8, 0, 0));
        assert!(teleport.travel_time.is_zero());
        assert!(teleport.route.travel_time.is_zero());

        let interaction = trip.get(1).and_then(PlanElement::as_activity).unwrap();
        assert_eq!(interaction.kind, STAGE_ACTIVITY);
        assert_eq!(interaction.link_id, link(STATION_LINK));
        assert_eq!(interaction.max_duration, Some(Duration::ZERO));
    }

    #[test_log::test]
    fn inner_elements_follow_in_order() {
        let inner = Scripted::new(base_from_station());
        let trip = composer_over(inner.clone()).calc_route(&request("A", "B")).unwrap();

        let mut expected = inner.trip.clone();
        crate::TripComposer::new(
            ModuleSlot::empty(TransportMode::Train),
            DefaultPlanFactory,
            station(),
        )
        .reconcile_endpoints(&mut expected)
        .unwrap();
        assert_eq!(&trip.elements()[2..], expected.elements());
    }

    #[test_log::test]
    fn composed_trip_chains_when_inner_starts_at_station() {
        let trip = composer_over(Scripted::new(base_from_station()))
            .with_anchor_check(AnchorCheck::Enforce)
            .calc_route(&request("A", "B"))
            .unwrap();
        trip.check_chaining().unwrap();
        assert_eq!(trip.start_link(), Some(&link("A")));
    }

    #[test_log::test]
    fn end_to_end_scenario() {
        let request = crate::RoutingRequest::between_links("A", "B", Time::from_secs(100));
        let trip = composer_over(Scripted::new(base_from_home()))
            .calc_route(&request)
            .unwrap();

        assert_eq!(trip.len(), 6);
        let teleport = trip.get(0).and_then(PlanElement::as_leg).unwrap();
        assert_eq!(teleport.departure_time, Time::from_secs(100));
        assert_eq!(teleport.route.start_link, link("A"));
        // Inner element 3 is now at position 5 and alights at the station.
        assert_eq!(trip.get(5).unwrap().end_link(), &link(STATION_LINK));

        let classifier = CompositeModeClassifier::new(DefaultMainModeIdentifier);
        assert_eq!(classifier.identify(&trip), TELEPORT_MAIN_MODE);
    }

    #[test_log::test]
    fn short_inner_trip_fails() {
        let mut short = base_from_home();
        short = short.into_iter().take(3).collect();
        let result = composer_over(Scripted::new(short)).calc_route(&request("A", "B"));
        assert_eq!(
            result,
            Err(RoutingError::StructuralPrecondition { len: 3, required: 4 })
        );
    }

    #[test_log::test]
    fn inner_error_passes_through() {
        let result = composer_over(Arc::new(Unroutable)).calc_route(&request("A", "B"));
        assert_eq!(
            result,
            Err(RoutingError::NoRoute {
                from: link("A"),
                to:   link("B"),
                mode: TransportMode::Train,
            })
        );
    }

    #[test_log::test]
    fn unbound_delegate_fails() {
        let composer = TripComposer::new(
            ModuleSlot::empty(TransportMode::Train),
            DefaultPlanFactory,
            station(),
        );
        assert_eq!(
            composer.calc_route(&request("A", "B")),
            Err(RoutingError::UnboundMode(TransportMode::Train))
        );
    }

    #[test_log::test]
    fn delegate_is_resolved_per_request() {
        let slot = ModuleSlot::empty(TransportMode::Train);
        let composer = TripComposer::new(slot.clone(), DefaultPlanFactory, station());

        let first = Scripted::new(base_from_station());
        slot.bind(first.clone());
        composer.calc_route(&request("A", "B")).unwrap();

        let second = Scripted::new(base_from_home());
        slot.bind(second.clone());
        let trip = composer.calc_route(&request("A", "B")).unwrap();

        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(trip.len(), 6);
    }

    #[test_log::test]
    fn closure_provider() {
        let inner: Arc<dyn RoutingModule> = Scripted::new(base_from_station());
        let composer = TripComposer::new(
            move || Arc::clone(&inner),
            DefaultPlanFactory,
            station(),
        );
        assert_eq!(composer.calc_route(&request("A", "B")).unwrap().len(), 7);
    }

    #[test_log::test]
    fn enforce_rejects_inner_trip_off_station() {
        let result = composer_over(Scripted::new(base_from_home()))
            .with_anchor_check(AnchorCheck::Enforce)
            .calc_route(&request("A", "B"));
        assert_eq!(
            result,
            Err(RoutingError::AnchorMismatch {
                expected: link(STATION_LINK),
                found:    link("A"),
            })
        );
    }

    #[test]
    fn from_config_maps_anchor_policy() {
        let slot = ModuleSlot::empty(TransportMode::Train);
        slot.bind(Scripted::new(base_from_home()));
        let config = RoutingConfig { enforce_anchor_link: true, ..RoutingConfig::default() };
        let composer = TripComposer::from_config(slot, DefaultPlanFactory, station(), &config);
        assert!(matches!(
            composer.calc_route(&request("A", "B")),
            Err(RoutingError::AnchorMismatch { .. })
        ));
    }

    #[test]
    fn concurrent_requests_share_one_composer() {
        let inner = Scripted::new(base_from_station());
        let composer = Arc::new(composer_over(inner.clone()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let composer = Arc::clone(&composer);
                std::thread::spawn(move || {
                    composer.calc_route(&request(&format!("H{i}"), "B")).map(|t| t.len())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(7));
        }
        assert_eq!(inner.calls(), 4);
    }
}

// ── Main-mode identification ──────────────────────────────────────────────────

#[cfg(test)]
mod main_mode_tests {
    use mstr_core::{TELEPORT_LEG_MODE, TELEPORT_MAIN_MODE, TransportMode};
    use mstr_plan::Itinerary;

    use super::helpers::*;
    use crate::{CompositeModeClassifier, DefaultMainModeIdentifier, MainModeIdentifier};

    /// Answers a fixed mode regardless of input.
    struct Sentinel;

    impl MainModeIdentifier for Sentinel {
        fn identify(&self, _trip: &Itinerary) -> TransportMode {
            TransportMode::from("sentinel")
        }
    }

    #[test]
    fn teleport_leg_anywhere_wins() {
        let classifier = CompositeModeClassifier::new(Sentinel);
        for position in 0..=4 {
            let mut trip = base_from_home();
            trip.insert(position, leg(TELEPORT_LEG_MODE, "A", STATION_LINK));
            assert_eq!(classifier.identify(&trip), TELEPORT_MAIN_MODE);
        }
    }

    #[test]
    fn teleport_label_on_custom_mode_is_recognized() {
        let classifier = CompositeModeClassifier::new(DefaultMainModeIdentifier);
        let mut trip = base_from_home();
        trip.insert(0, leg(TransportMode::Other("prleg".into()), "A", STATION_LINK));
        assert_eq!(classifier.identify(&trip), TELEPORT_MAIN_MODE);

        // The fallback alone would still see a rail trip.
        assert_eq!(classifier.fallback().identify(&trip), TransportMode::Train);
    }

    #[test]
    fn without_teleport_leg_fallback_decides() {
        let classifier = CompositeModeClassifier::new(Sentinel);
        assert_eq!(classifier.identify(&base_from_home()), TransportMode::from("sentinel"));
        assert_eq!(classifier.identify(&Itinerary::new()), TransportMode::from("sentinel"));
    }

    #[test]
    fn main_mode_label_alone_is_not_a_teleport_trip() {
        let classifier = CompositeModeClassifier::new(Sentinel);
        let mut trip = Itinerary::new();
        trip.push(leg(TELEPORT_MAIN_MODE, "A", "B"));
        assert_eq!(classifier.identify(&trip), TransportMode::from("sentinel"));
    }

    #[test]
    fn default_ranks_transit_over_walk() {
        let id = DefaultMainModeIdentifier;
        assert_eq!(id.identify(&base_from_home()), TransportMode::Train);

        let mut trip = Itinerary::new();
        trip.push(leg(TransportMode::Walk, "A", "B"));
        trip.push(leg(TransportMode::Car, "B", "C"));
        trip.push(leg(TransportMode::Bike, "C", "D"));
        assert_eq!(id.identify(&trip), TransportMode::Car);

        let mut custom = Itinerary::new();
        custom.push(leg(TransportMode::Car, "A", "B"));
        custom.push(leg(TransportMode::Other("train".into()), "B", "C"));
        assert_eq!(id.identify(&custom), TransportMode::Train);
    }

    #[test]
    fn default_prefers_earlier_leg_on_tie() {
        let mut trip = Itinerary::new();
        trip.push(leg(TransportMode::Pt, "A", "B"));
        trip.push(leg(TransportMode::Train, "B", "C"));
        assert_eq!(DefaultMainModeIdentifier.identify(&trip), TransportMode::Pt);
    }

    #[test]
    fn default_without_legs_is_walk() {
        let mut trip = Itinerary::new();
        trip.push(stage("A"));
        assert_eq!(DefaultMainModeIdentifier.identify(&trip), TransportMode::Walk);
    }

    #[test]
    fn arc_identifier_delegates() {
        let shared = std::sync::Arc::new(CompositeModeClassifier::new(DefaultMainModeIdentifier));
        let mut trip = base_from_home();
        trip.insert(0, leg(TELEPORT_LEG_MODE, "A", STATION_LINK));
        assert_eq!(shared.identify(&trip), TELEPORT_MAIN_MODE);
    }
}

// ── Beeline routing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod teleported_tests {
    use mstr_core::{Coord, TeleportedModeParams, Time, TransportMode};
    use mstr_plan::PlanElement;

    use crate::{Anchor, FacilityRef, RoutingError, RoutingModule, RoutingRequest, TeleportedModeRouter};

    fn walk_router() -> TeleportedModeRouter {
        TeleportedModeRouter::new(TeleportedModeParams::new(TransportMode::Walk, 1.25, 1.5))
    }

    #[test]
    fn beeline_leg() {
        let request = RoutingRequest::new(
            FacilityRef::at("A", Coord::new(0.0, 0.0)),
            FacilityRef::at("B", Coord::new(300.0, 400.0)),
            Time::from_hms(7, 30, 0),
        );
        let trip = walk_router().calc_route(&request).unwrap();
        assert_eq!(trip.len(), 1);

        let leg = trip.get(0).and_then(PlanElement::as_leg).unwrap();
        assert_eq!(leg.mode, TransportMode::Walk);
        assert_eq!(leg.departure_time, Time::from_hms(7, 30, 0));
        // 500 m × 1.5 = 750 m at 1.25 m/s = 600 s.
        assert_eq!(leg.travel_time.secs(), 600);
        assert_eq!(leg.route.travel_time.secs(), 600);
        assert!((leg.route.distance.unwrap() - 750.0).abs() < 1e-9);
        assert_eq!(leg.route.start_link.as_str(), "A");
        assert_eq!(leg.route.end_link.as_str(), "B");
    }

    #[test]
    fn from_station_facility() {
        let router = walk_router();
        assert_eq!(router.params().mode, TransportMode::Walk);
        assert_eq!(router.params().speed_mps, 1.25);

        let station = Anchor::on_link("station", "S", Coord::new(0.0, 0.0));
        let from = station.as_facility();
        assert_eq!(from.link_id.as_str(), "S");
        assert_eq!(from.coord, Some(Coord::new(0.0, 0.0)));

        let request = RoutingRequest::new(from, FacilityRef::at("B", Coord::new(0.0, 50.0)), Time::MIDNIGHT);
        let trip = router.calc_route(&request).unwrap();
        // 50 m × 1.5 = 75 m at 1.25 m/s = 60 s.
        assert_eq!(trip.travel_time().secs(), 60);
        assert_eq!(trip.start_link().map(|l| l.as_str()), Some("S"));
    }

    #[test]
    fn partial_seconds_round_up() {
        let request = RoutingRequest::new(
            FacilityRef::at("A", Coord::new(0.0, 0.0)),
            FacilityRef::at("B", Coord::new(1.0, 0.0)),
            Time::MIDNIGHT,
        );
        // 1.5 m at 1.25 m/s = 1.2 s.
        let trip = walk_router().calc_route(&request).unwrap();
        assert_eq!(trip.travel_time().secs(), 2);
    }

    #[test]
    fn same_point_is_instant() {
        let here = Coord::new(10.0, 10.0);
        let request = RoutingRequest::new(
            FacilityRef::at("A", here),
            FacilityRef::at("A", here),
            Time::MIDNIGHT,
        );
        let trip = walk_router().calc_route(&request).unwrap();
        assert!(trip.travel_time().is_zero());
    }

    #[test]
    fn missing_coordinate() {
        let request = RoutingRequest::new(
            FacilityRef::at("A", Coord::new(0.0, 0.0)),
            FacilityRef::on_link("B"),
            Time::MIDNIGHT,
        );
        assert_eq!(
            walk_router().calc_route(&request),
            Err(RoutingError::MissingCoord("B".into()))
        );
    }
}

// ── TripRouter ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trip_router_tests {
    use std::sync::Arc;

    use mstr_core::{TELEPORT_MAIN_MODE, TransportMode};
    use mstr_plan::{DefaultPlanFactory, PlanError};

    use super::helpers::*;
    use crate::{RoutingError, TripComposer, TripRouter};

    #[test]
    fn unknown_mode_is_unbound() {
        let router = TripRouter::new();
        assert_eq!(
            router.calc_route(&TransportMode::Car, &request("A", "B")),
            Err(RoutingError::UnboundMode(TransportMode::Car))
        );
    }

    #[test]
    fn provider_without_binding_is_not_bound() {
        let mut router = TripRouter::new();
        let _slot = router.provider(TransportMode::Train);
        assert!(!router.is_bound(&TransportMode::Train));
        assert_eq!(router.modes().count(), 0);
        assert_eq!(
            router.calc_route(&TransportMode::Train, &request("A", "B")),
            Err(RoutingError::UnboundMode(TransportMode::Train))
        );
    }

    #[test_log::test]
    fn composer_bound_before_its_delegate() {
        let mut router = TripRouter::new();
        let train = router.provider(TransportMode::Train);
        router.bind(
            TELEPORT_MAIN_MODE,
            Arc::new(TripComposer::new(train, DefaultPlanFactory, station())),
        );
        router.bind(TransportMode::Train, Scripted::new(base_from_station()));

        let trip = router.calc_route(&TELEPORT_MAIN_MODE, &request("A", "B")).unwrap();
        assert_eq!(trip.len(), 7);
        assert!(router.is_bound(&TELEPORT_MAIN_MODE));
        assert!(router.is_bound(&TransportMode::Train));
    }

    #[test_log::test]
    fn rebinding_is_seen_by_composer() {
        let mut router = TripRouter::new();
        let train = router.provider(TransportMode::Train);
        router.bind(
            TELEPORT_MAIN_MODE,
            Arc::new(TripComposer::new(train, DefaultPlanFactory, station())),
        );
        router.bind(TransportMode::Train, Scripted::new(base_from_station()));
        let replacement = Scripted::new(base_from_home());
        router.bind(TransportMode::Train, replacement.clone());

        let trip = router.calc_route(&TELEPORT_MAIN_MODE, &request("A", "B")).unwrap();
        assert_eq!(trip.len(), 6);
        assert_eq!(replacement.calls(), 1);
    }

    #[test]
    fn chain_check_rejects_broken_trip() {
        let mut router = TripRouter::new().with_chain_check(true);
        let train = router.provider(TransportMode::Train);
        router.bind(
            TELEPORT_MAIN_MODE,
            Arc::new(TripComposer::new(train, DefaultPlanFactory, station())),
        );
        router.bind(TransportMode::Train, Scripted::new(base_from_home()));

        // prleg ends at S, the interaction is at S, the inner walk starts at A.
        assert_eq!(
            router.calc_route(&TELEPORT_MAIN_MODE, &request("A", "B")),
            Err(RoutingError::Plan(PlanError::BrokenChain {
                index:    2,
                expected: link(STATION_LINK),
                found:    link("A"),
            }))
        );
    }

    #[test]
    fn bindings_are_keyed_by_label() {
        let mut router = TripRouter::new();
        router.bind(TransportMode::Other("train".into()), Scripted::new(base_from_station()));
        assert!(router.is_bound(&TransportMode::Train));
        assert!(router.calc_route(&TransportMode::Train, &request("A", "B")).is_ok());
    }

    #[test]
    fn batch_preserves_order() {
        let mut router = TripRouter::new();
        router.bind(TransportMode::Train, Scripted::new(base_from_station()));
        let jobs = vec![
            (TransportMode::Train, request("A", "B")),
            (TransportMode::Car, request("A", "B")),
            (TransportMode::Train, request("C", "D")),
        ];
        let results = router.calc_routes(&jobs);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(RoutingError::UnboundMode(TransportMode::Car)));
        assert!(results[2].is_ok());
    }
}
