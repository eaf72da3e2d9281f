//! Trip structure of a person's day plan.
//!
//! A day plan alternates *main* activities (home, work, …) with trips.  A
//! trip is everything between two consecutive main activities: its legs and
//! the *stage* activities that glue multi-leg trips together (transit
//! boardings, the teleport-station marker, …).  Stage activities are
//! recognised by the `" interaction"` suffix of their kind.
//!
//! ```text
//! home  walk  pt interaction  train  pt interaction  walk  work
//! ────  ───────────────────── trip 0 ──────────────────────  ────
//! ```

use std::ops::Range;

use mstr_core::Time;

use crate::{Activity, Itinerary, PlanElement, PlanError, PlanResult};

/// Suffix shared by all stage-activity kinds.
pub const INTERACTION_SUFFIX: &str = " interaction";

/// `true` if an activity of `kind` is bookkeeping inside a trip rather than
/// a main activity.
#[inline]
pub fn is_stage_activity(kind: &str) -> bool {
    kind.ends_with(INTERACTION_SUFFIX)
}

/// A borrowed view of one trip inside a day plan.
#[derive(Debug, Clone, Copy)]
pub struct Trip<'a> {
    pub origin:      &'a Activity,
    pub destination: &'a Activity,
    /// Legs and stage activities between `origin` and `destination`.
    pub elements:    &'a [PlanElement],
    /// Position of `elements` within the plan.
    pub start:       usize,
}

impl Trip<'_> {
    /// Index range of the trip's elements within the plan.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.elements.len()
    }

    /// When the trip starts: the origin's end time, falling back to the
    /// first leg's departure.
    pub fn departure_time(&self) -> Option<Time> {
        self.origin.end_time.or_else(|| {
            self.elements
                .iter()
                .find_map(PlanElement::as_leg)
                .map(|leg| leg.departure_time)
        })
    }

    /// The trip's elements as an owned itinerary.
    pub fn to_itinerary(&self) -> Itinerary {
        self.elements.iter().cloned().collect()
    }
}

/// Split `plan` into trips between consecutive main activities.
///
/// Two adjacent main activities yield a trip with no elements.  Elements
/// before the first or after the last main activity belong to no trip.
pub fn trips(plan: &[PlanElement]) -> Vec<Trip<'_>> {
    let mut out = Vec::new();
    let mut origin: Option<(usize, &Activity)> = None;

    for (i, element) in plan.iter().enumerate() {
        let PlanElement::Activity(act) = element else {
            continue;
        };
        if is_stage_activity(&act.kind) {
            continue;
        }
        if let Some((o, origin_act)) = origin {
            out.push(Trip {
                origin:      origin_act,
                destination: act,
                elements:    &plan[o + 1..i],
                start:       o + 1,
            });
        }
        origin = Some((i, act));
    }
    out
}

/// Replace the elements of trip `index` with `itinerary`, keeping the
/// surrounding main activities.
pub fn replace_trip(
    plan: &mut Vec<PlanElement>,
    index: usize,
    itinerary: Itinerary,
) -> PlanResult<()> {
    let ranges: Vec<Range<usize>> = trips(plan).iter().map(Trip::range).collect();
    let range = ranges
        .get(index)
        .cloned()
        .ok_or(PlanError::TripOutOfRange { index, count: ranges.len() })?;
    plan.splice(range, itinerary);
    Ok(())
}
