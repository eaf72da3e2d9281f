//! The ordered element sequence returned by a routing module.

use mstr_core::{Duration, LinkId};

use crate::{Leg, PlanElement, PlanError, PlanResult};

/// An ordered sequence of legs and activities describing one trip.
///
/// The sequence is owned by whoever receives it from a router; no component
/// keeps a copy.  Structural checks are explicit ([`check_chaining`]) rather
/// than enforced on every mutation, because routers build itineraries
/// incrementally and patch them in place.
///
/// [`check_chaining`]: Itinerary::check_chaining
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    elements: Vec<PlanElement>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only slice of all elements in travel order.
    pub fn elements(&self) -> &[PlanElement] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&PlanElement> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlanElement> {
        self.elements.get_mut(index)
    }

    pub fn push(&mut self, element: impl Into<PlanElement>) {
        self.elements.push(element.into());
    }

    /// Insert `element` at `index`, shifting later elements back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, element: impl Into<PlanElement>) {
        self.elements.insert(index, element.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanElement> {
        self.elements.iter()
    }

    pub fn into_elements(self) -> Vec<PlanElement> {
        self.elements
    }

    // ── Leg views ─────────────────────────────────────────────────────────

    pub fn legs(&self) -> impl Iterator<Item = &Leg> + '_ {
        self.elements.iter().filter_map(PlanElement::as_leg)
    }

    pub fn legs_mut(&mut self) -> impl Iterator<Item = &mut Leg> + '_ {
        self.elements.iter_mut().filter_map(PlanElement::as_leg_mut)
    }

    /// Sum of all leg travel times.
    pub fn travel_time(&self) -> Duration {
        self.legs().fold(Duration::ZERO, |acc, leg| acc + leg.travel_time)
    }

    // ── Endpoints ─────────────────────────────────────────────────────────

    /// Link where the itinerary begins, or `None` if it is empty.
    pub fn start_link(&self) -> Option<&LinkId> {
        self.elements.first().map(PlanElement::start_link)
    }

    /// Link where the itinerary ends, or `None` if it is empty.
    pub fn end_link(&self) -> Option<&LinkId> {
        self.elements.last().map(PlanElement::end_link)
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify that every leg/activity boundary shares its link.
    ///
    /// Returns [`PlanError::BrokenChain`] for the first offending boundary;
    /// `index` is the position of the *second* element of the pair.
    /// Leg/leg and activity/activity neighbours are not constrained.
    pub fn check_chaining(&self) -> PlanResult<()> {
        for (i, pair) in self.elements.windows(2).enumerate() {
            let (expected, found) = match (&pair[0], &pair[1]) {
                (PlanElement::Leg(leg), PlanElement::Activity(act)) => {
                    (&leg.route.end_link, &act.link_id)
                }
                (PlanElement::Activity(act), PlanElement::Leg(leg)) => {
                    (&act.link_id, &leg.route.start_link)
                }
                _ => continue,
            };
            if expected != found {
                return Err(PlanError::BrokenChain {
                    index:    i + 1,
                    expected: expected.clone(),
                    found:    found.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<PlanElement>> for Itinerary {
    fn from(elements: Vec<PlanElement>) -> Self {
        Self { elements }
    }
}

impl FromIterator<PlanElement> for Itinerary {
    fn from_iter<I: IntoIterator<Item = PlanElement>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl IntoIterator for Itinerary {
    type Item = PlanElement;
    type IntoIter = std::vec::IntoIter<PlanElement>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a PlanElement;
    type IntoIter = std::slice::Iter<'a, PlanElement>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
