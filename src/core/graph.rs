// location graph: node map + owned notes
use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::note::DeliveryNote;
use crate::core::types::{LocationId, NoteId};

/// A named place some note departs from or arrives at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    /// The note whose `to` is this location.
    pub arrival: Option<NoteId>,
    /// The note whose `from` is this location.
    pub departure: Option<NoteId>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival: None,
            departure: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("The path specified is not direct. More ways lead to \"{location}\"!")]
    DuplicateArrival { location: String },

    #[error("The path specified is not direct. More ways lead from \"{location}\"!")]
    DuplicateDeparture { location: String },

    #[error("Cannot find single destination where the transport starts! The number of starting points is {count}. Some of delivery notes may be missed!")]
    AmbiguousSource { count: usize },

    #[error("The input delivery notes form a cyclic path! Walked {steps} legs over {total} notes.")]
    CyclicPath { steps: usize, total: usize },

    #[error("Only {visited} from {total} delivery notes lead to destination. The others have been rejected!")]
    IncompleteCoverage { visited: usize, total: usize },
}

/// Every location mentioned by a set of notes, each linked to at most one
/// arriving and one departing note.
///
/// Notes are owned here and referenced by `NoteId`; locations are looked up by
/// name through `index` and referenced by `LocationId`.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub(crate) notes: Vec<DeliveryNote>,
    pub(crate) locations: Vec<Location>,
    pub(crate) index: HashMap<String, LocationId>,
    pub(crate) source: Option<LocationId>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn note(&self, id: NoteId) -> Option<&DeliveryNote> {
        self.notes.get(id)
    }

    pub fn notes(&self) -> &[DeliveryNote] {
        &self.notes
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&id| &self.locations[id])
    }

    pub fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn iter_locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// The single starting location, once `locate_source` succeeded.
    pub fn source(&self) -> Option<&Location> {
        self.source.map(|id| &self.locations[id])
    }

    //locations nothing arrives at, in first-seen order
    pub fn source_candidates(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, l)| l.arrival.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    //locations nothing departs from, in first-seen order
    pub fn sink_candidates(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, l)| l.departure.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Look a location up by name, creating it on first reference.
    pub(crate) fn get_or_create_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.locations.len();
        self.locations.push(Location::new(name));
        self.index.insert(name.to_string(), id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_created_once_per_name() {
        let mut g = RouteGraph::new();
        let a = g.get_or_create_location("Porto");
        let b = g.get_or_create_location("Madrid");
        let a_again = g.get_or_create_location("Porto");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(g.location_count(), 2);
        assert_eq!(g.location("Madrid").unwrap().name, "Madrid");
        assert!(g.location("London").is_none());
    }

    #[test]
    fn fresh_locations_are_both_source_and_sink_candidates() {
        let mut g = RouteGraph::new();
        g.get_or_create_location("A");
        g.get_or_create_location("B");

        assert_eq!(g.source_candidates(), vec![0, 1]);
        assert_eq!(g.sink_candidates(), vec![0, 1]);
        assert!(g.source().is_none());
    }

    #[test]
    fn notes_and_locations_are_reachable_by_id() {
        let g = RouteGraph::build(vec![
            DeliveryNote::new("Van", "B", "C", "AnyVan"),
            DeliveryNote::new("Truck", "A", "B", "Correios"),
        ])
        .unwrap();

        assert_eq!(g.notes().len(), 2);
        assert_eq!(g.note(1).unwrap().delivery_company, "Correios");
        assert!(g.note(2).is_none());

        //ids follow first reference: C (to of note 0), B, A
        let names: Vec<&str> = g.iter_locations().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["C", "B", "A"]);

        let b = g.location_by_id(1).unwrap();
        assert_eq!(b.arrival, Some(1));
        assert_eq!(b.departure, Some(0));
        assert!(g.location_by_id(3).is_none());
    }

    #[test]
    fn error_messages_name_the_location_and_counts() {
        let e = GraphError::DuplicateArrival { location: "Porto".into() };
        assert_eq!(e.to_string(), "The path specified is not direct. More ways lead to \"Porto\"!");

        let e = GraphError::AmbiguousSource { count: 2 };
        assert!(e.to_string().contains("The number of starting points is 2."));

        let e = GraphError::IncompleteCoverage { visited: 3, total: 5 };
        assert!(e.to_string().starts_with("Only 3 from 5 delivery notes"));
    }
}
