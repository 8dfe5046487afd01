// graph construction: link notes to locations, find the single source
use log::{debug, warn};

use crate::core::graph::{GraphError, RouteGraph};
use crate::core::note::DeliveryNote;
use crate::core::types::{LocationId, NoteId};

impl RouteGraph {
    //build rules:
    //1. a location has at most one arriving note (no merging routes)
    //2. a location has at most one departing note (no branching routes)
    //3. exactly one location has no arriving note, that is where the route starts
    //any violation rejects the whole input, no partial graph comes back

    /// Build the location graph for a set of notes given in any order.
    pub fn build(notes: Vec<DeliveryNote>) -> Result<RouteGraph, GraphError> {
        let mut g = RouteGraph::new();
        for note in notes {
            g.add_note(note)?;
        }
        g.locate_source()?;
        Ok(g)
    }

    /// Link one note to its arrival and departure locations.
    ///
    /// The arrival side is checked first, so a note that both merges and
    /// branches reports `DuplicateArrival`.
    pub fn add_note(&mut self, note: DeliveryNote) -> Result<NoteId, GraphError> {
        let id = self.notes.len();

        let to = self.get_or_create_location(&note.to);
        if self.locations[to].arrival.is_some() {
            warn!("second note arriving at {:?}", note.to);
            return Err(GraphError::DuplicateArrival { location: note.to });
        }

        let from = self.get_or_create_location(&note.from);
        if self.locations[from].departure.is_some() {
            warn!("second note departing from {:?}", note.from);
            return Err(GraphError::DuplicateDeparture { location: note.from });
        }

        self.locations[to].arrival = Some(id);
        self.locations[from].departure = Some(id);
        debug!("note #{} linked: {:?} -> {:?}", id, note.from, note.to);

        self.notes.push(note);
        Ok(id)
    }

    /// Pick the one location nothing arrives at and remember it as the source.
    pub fn locate_source(&mut self) -> Result<LocationId, GraphError> {
        let candidates = self.source_candidates();
        match candidates.as_slice() {
            [only] => {
                self.source = Some(*only);
                debug!("route starts at {:?}", self.locations[*only].name);
                Ok(*only)
            }
            _ => {
                warn!("{} candidate start locations", candidates.len());
                self.source = None;
                Err(GraphError::AmbiguousSource {
                    count: candidates.len(),
                })
            }
        }
    }
}
