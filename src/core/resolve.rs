// route walk from the source location
use log::{debug, info};

use crate::core::graph::{GraphError, Location, RouteGraph};
use crate::core::note::DeliveryNote;
use crate::core::types::{LocationId, NoteId};

impl RouteGraph {
    /// Walk departures from the source and return the note ids in travel order.
    ///
    /// The walk is capped at `note_count` legs (`CyclicPath` beyond that) and
    /// must reach every note (`IncompleteCoverage` otherwise).
    pub fn resolve_ids(&self) -> Result<Vec<NoteId>, GraphError> {
        self.walk().map(|(route, _)| route)
    }

    //returns the visited notes plus the location the walk stopped at
    fn walk(&self) -> Result<(Vec<NoteId>, LocationId), GraphError> {
        let total = self.note_count();
        let mut current = self.source.ok_or_else(|| GraphError::AmbiguousSource {
            count: self.source_candidates().len(),
        })?;
        let start = current;

        let mut route = Vec::with_capacity(total);
        while let Some(note_id) = self.locations[current].departure {
            route.push(note_id);
            if route.len() > total {
                return Err(GraphError::CyclicPath {
                    steps: route.len(),
                    total,
                });
            }

            let note = &self.notes[note_id];
            debug!("leg {}: {:?} -> {:?}", route.len(), note.from, note.to);
            current = self.next_location(note, route.len())?;
        }

        if route.len() != total {
            return Err(GraphError::IncompleteCoverage {
                visited: route.len(),
                total,
            });
        }

        info!(
            "route resolved: {} legs from {:?} to {:?}",
            total, self.locations[start].name, self.locations[current].name
        );
        Ok((route, current))
    }

    /// Notes in travel order, from the source to the sink.
    pub fn resolve(&self) -> Result<Vec<&DeliveryNote>, GraphError> {
        Ok(self
            .resolve_ids()?
            .into_iter()
            .map(|id| &self.notes[id])
            .collect())
    }

    /// Where the resolved route ends.
    pub fn sink(&self) -> Result<&Location, GraphError> {
        let (_, end) = self.walk()?;
        Ok(&self.locations[end])
    }

    //every `to` was registered during build, a miss means the graph was assembled by hand
    fn next_location(&self, note: &DeliveryNote, visited: usize) -> Result<LocationId, GraphError> {
        self.index
            .get(&note.to)
            .copied()
            .ok_or(GraphError::IncompleteCoverage {
                visited,
                total: self.note_count(),
            })
    }
}
