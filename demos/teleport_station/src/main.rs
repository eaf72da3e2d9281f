//! teleport_station — wiring example for teleport-and-ride trips.
//!
//! Binds a scripted transit router for `train`, beeline routers for the
//! teleported modes, and a `TripComposer` for `pAr` that teleports travellers to the
//! station before handing over to whatever `train` is bound to.  Routes a
//! handful of commuters, classifies their trips, then lets a mode-change
//! strategy rewrite one day plan.
//!
//! ```text
//! cargo run -p teleport_station -- demos/teleport_station/config.json
//! RUST_LOG=debug cargo run -p teleport_station
//! ```

mod network;

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::{Context, Result};

use mstr_core::{AgentId, AgentRng, Coord, RoutingConfig, TELEPORT_MAIN_MODE, Time, TransportMode};
use mstr_plan::{Activity, DefaultPlanFactory, PlanElement, trips};
use mstr_replan::{ChangeTripMode, PlanStrategy};
use mstr_router::{
    Anchor, CompositeModeClassifier, DefaultMainModeIdentifier, FacilityRef, MainModeIdentifier,
    RoutingRequest, TeleportedModeRouter, TripComposer, TripRouter,
};

use network::{STATION_LINK, ScriptedTransit, station_coord};

// ── Commuters ─────────────────────────────────────────────────────────────────

/// (home link, home coord, work link, work coord, departure)
const COMMUTERS: &[(&str, (f64, f64), &str, (f64, f64), (u64, u64))] = &[
    ("H0", (-400.0, 300.0),  "W0", (6_200.0, 100.0), (7, 15)),
    ("H1", (250.0, -500.0),  "W1", (5_800.0, -300.0), (7, 40)),
    ("H2", (-900.0, 0.0),    "W0", (6_200.0, 100.0), (8, 5)),
];

fn load_config() -> Result<RoutingConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))?
        }
        None => RoutingConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config()?;
    log::info!("routing config: {config:?}");

    let walk = config
        .teleported(&TransportMode::Walk)
        .cloned()
        .context("config has no teleported walk mode")?;

    // 1. Router: pAr is bound before the train module it delegates to.
    let station = Arc::new(Anchor::on_link("pr_station", STATION_LINK, station_coord()));
    let mut router = TripRouter::new();
    let train = router.provider(config.transit_mode.clone());
    router.bind(
        TELEPORT_MAIN_MODE,
        Arc::new(TripComposer::from_config(train, DefaultPlanFactory, Arc::clone(&station), &config)),
    );
    for params in &config.teleported_modes {
        router.bind(params.mode.clone(), Arc::new(TeleportedModeRouter::new(params.clone())));
    }
    router.bind(config.transit_mode.clone(), Arc::new(ScriptedTransit::new(walk)));
    let router = Arc::new(router);

    let classifier = CompositeModeClassifier::new(DefaultMainModeIdentifier);

    // 2. Route every commuter by train and by pAr.
    let jobs: Vec<(TransportMode, RoutingRequest)> = COMMUTERS
        .iter()
        .enumerate()
        .flat_map(|(i, &(home, (hx, hy), work, (wx, wy), (h, m)))| {
            let request = RoutingRequest::new(
                FacilityRef::at(home, Coord::new(hx, hy)),
                FacilityRef::at(work, Coord::new(wx, wy)),
                Time::from_hms(h, m, 0),
            )
            .for_agent(AgentId(i as u32));
            [
                (config.transit_mode.clone(), request.clone()),
                (TELEPORT_MAIN_MODE, request),
            ]
        })
        .collect();

    println!("{:<12} {:<6} {:<6} {:>8} {:>9}  {}", "Agent", "Mode", "Class", "Elements", "Travel", "Legs");
    println!("{}", "-".repeat(72));
    for ((mode, request), result) in jobs.iter().zip(router.calc_routes(&jobs)) {
        let agent = request.agent.unwrap_or_default();
        match result {
            Ok(trip) => {
                let legs: Vec<String> = trip
                    .legs()
                    .map(|l| format!("{}:{}→{}", l.mode, l.route.start_link, l.route.end_link))
                    .collect();
                println!(
                    "{:<12} {:<6} {:<6} {:>8} {:>9}  {}",
                    agent.to_string(),
                    mode.to_string(),
                    classifier.identify(&trip).to_string(),
                    trip.len(),
                    trip.travel_time().to_string(),
                    legs.join(" "),
                );
            }
            Err(e) => log::error!("{agent}: {mode} routing failed: {e}"),
        }
    }
    println!();

    // 3. Mode change on one day plan.
    let agent = AgentId(0);
    let (home, (hx, hy), work, (wx, wy), (h, m)) = COMMUTERS[0];
    let home_act = Activity::new("home", home.into()).with_coord(Coord::new(hx, hy));
    let mut plan: Vec<PlanElement> = vec![
        home_act.clone().with_end_time(Time::from_hms(h, m, 0)).into(),
        Activity::new("work", work.into())
            .with_coord(Coord::new(wx, wy))
            .with_end_time(Time::from_hms(17, 0, 0))
            .into(),
        home_act.into(),
    ];
    // Seed the day with train trips, then let the strategy change one.
    let day_trips: Vec<usize> = (0..trips(&plan).len()).collect();
    for i in day_trips {
        let request = {
            let all = trips(&plan);
            let trip = &all[i];
            RoutingRequest::new(
                FacilityRef { link_id: trip.origin.link_id.clone(), coord: trip.origin.coord },
                FacilityRef { link_id: trip.destination.link_id.clone(), coord: trip.destination.coord },
                trip.departure_time().context("trip has no departure time")?,
            )
        };
        let itinerary = router.calc_route(&config.transit_mode, &request)?;
        mstr_plan::replace_trip(&mut plan, i, itinerary)?;
    }

    let strategy = ChangeTripMode::from_config(Arc::clone(&router), classifier.clone(), &config);
    let mut rng = AgentRng::new(config.seed, agent);
    if let Err(e) = strategy.replan(agent, &mut plan, &mut rng) {
        log::warn!("{agent}: mode change failed, keeping plan: {e}");
    }

    println!("Day plan of {agent} after mode change:");
    for (i, trip) in trips(&plan).iter().enumerate() {
        println!(
            "  trip {i}: {} → {}  {}  ({} elements)",
            trip.origin.kind,
            trip.destination.kind,
            classifier.identify(&trip.to_itinerary()),
            trip.elements.len(),
        );
    }

    Ok(())
}
