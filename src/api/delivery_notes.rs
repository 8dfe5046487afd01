// text in, sorted text out
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::format::NoteFormat;
use crate::core::graph::RouteGraph;
use crate::core::note::DeliveryNote;
use crate::error::{Error, Result};

/// Parsed delivery notes, ready to be rendered in travel order.
#[derive(Debug, Clone)]
pub struct DeliveryNotes {
    graph: RouteGraph,
    format: NoteFormat,
}

/// The resolved route: where it starts, where it ends, and every leg in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub legs: Vec<DeliveryNote>,
}

impl DeliveryNotes {
    /// Parse notes written in the default `-deliveryNote` format.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &NoteFormat::default())
    }

    /// Split `text` on the format's delimiter, parse every non-empty block and
    /// build the location graph. Any bad block or graph rule rejects the input.
    pub fn parse_with(text: &str, format: &NoteFormat) -> Result<Self> {
        format.validate()?;

        let mut notes = Vec::new();
        for block in text.split(format.delimiter.as_str()) {
            if let Some(note) = DeliveryNote::parse_block(block)? {
                notes.push(note);
            }
        }
        debug!("parsed {} delivery notes", notes.len());

        let graph = RouteGraph::build(notes)?;
        Ok(Self {
            graph,
            format: format.clone(),
        })
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn format(&self) -> &NoteFormat {
        &self.format
    }

    pub fn parsed_notes_count(&self) -> usize {
        self.graph.note_count()
    }

    /// Notes in travel order, owned copies.
    pub fn sorted_notes(&self) -> Result<Vec<DeliveryNote>> {
        Ok(self.graph.resolve()?.into_iter().cloned().collect())
    }

    /// Notes in travel order, rendered in the same format they were parsed from.
    pub fn sorted_text(&self) -> Result<String> {
        let route = self.graph.resolve()?;
        Ok(route.iter().map(|n| n.to_block(&self.format)).collect())
    }

    pub fn route_summary(&self) -> Result<RouteSummary> {
        let legs = self.sorted_notes()?;
        let origin = legs.first().map(|n| n.from.clone()).unwrap_or_default();
        let destination = self.graph.sink()?.name.clone();
        Ok(RouteSummary {
            origin,
            destination,
            legs,
        })
    }

    /// The route summary as a TOON document.
    pub fn to_toon(&self) -> Result<String> {
        let summary = self.route_summary()?;
        toon_format::encode_default(&summary).map_err(|e| Error::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::GraphError;
    use crate::core::note::ParseError;

    const THREE_LEGS: &str = "
-deliveryNote
    meanOfTransportation: Van
    from: B
    to: C
    deliveryCompany: AnyVan
-deliveryNote
    meanOfTransportation: Truck
    from: A
    to: B
    deliveryCompany: Correios
-deliveryNote
    meanOfTransportation: Flight
    from: C
    to: D
    deliveryCompany: DHL
";

    #[test]
    fn sorted_text_follows_the_route() {
        let notes = DeliveryNotes::parse(THREE_LEGS).unwrap();
        assert_eq!(notes.parsed_notes_count(), 3);

        let text = notes.sorted_text().unwrap();
        let froms: Vec<&str> = text
            .lines()
            .filter_map(|l| l.trim().strip_prefix("from: "))
            .collect();
        assert_eq!(froms, vec!["A", "B", "C"]);
        assert!(text.starts_with("-deliveryNote\n    meanOfTransportation: Truck\n"));
    }

    #[test]
    fn sorted_text_reparses_to_the_same_route() {
        let first = DeliveryNotes::parse(THREE_LEGS).unwrap().sorted_text().unwrap();
        let second = DeliveryNotes::parse(&first).unwrap().sorted_text().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_field_aborts_parsing() {
        let text = "-deliveryNote\n    from: A\n    to: B\n    color: red\n";
        let err = DeliveryNotes::parse(text).unwrap_err();
        match err {
            Error::Parse(ParseError::UnrecognizedField { line }) => assert_eq!(line, "    color: red"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn graph_errors_surface_through_the_facade() {
        let text = "-deliveryNote\n from: A\n to: B\n-deliveryNote\n from: A\n to: C\n";
        let err = DeliveryNotes::parse(text).unwrap_err();
        assert!(matches!(
            err,
            Error::Graph(GraphError::DuplicateDeparture { ref location }) if location == "A"
        ));
    }

    #[test]
    fn empty_text_has_no_start() {
        let err = DeliveryNotes::parse("  \n").unwrap_err();
        assert!(matches!(err, Error::Graph(GraphError::AmbiguousSource { count: 0 })));
    }

    #[test]
    fn custom_format_round_trips() {
        let format = NoteFormat {
            delimiter: "#note".to_string(),
            indent: "  ".to_string(),
        };
        let text = "#note\n  from: X\n  to: Y\n#note\n  from: W\n  to: X\n";
        let notes = DeliveryNotes::parse_with(text, &format).unwrap();
        assert_eq!(notes.format(), &format);

        let sorted = notes.sorted_text().unwrap();
        assert!(sorted.starts_with("#note\n  meanOfTransportation: \n  from: W\n"));

        let again = DeliveryNotes::parse_with(&sorted, &format).unwrap();
        assert_eq!(again.sorted_text().unwrap(), sorted);
    }

    #[test]
    fn notes_without_optional_fields_reparse() {
        let notes = DeliveryNotes::parse("-deliveryNote\n    from: A\n    to: B\n").unwrap();
        let sorted = notes.sorted_text().unwrap();
        assert_eq!(
            sorted,
            "-deliveryNote\n    meanOfTransportation: \n    from: A\n    to: B\n    deliveryCompany: \n"
        );

        let again = DeliveryNotes::parse(&sorted).unwrap();
        assert_eq!(again.sorted_notes().unwrap(), notes.sorted_notes().unwrap());
        assert_eq!(again.sorted_text().unwrap(), sorted);
    }

    #[test]
    fn graph_is_exposed_after_parsing() {
        let notes = DeliveryNotes::parse(THREE_LEGS).unwrap();
        let g = notes.graph();
        assert_eq!(g.note_count(), 3);
        assert_eq!(g.location_count(), 4);
        assert_eq!(g.source().unwrap().name, "A");
        assert_eq!(notes.format(), &NoteFormat::default());
    }

    #[test]
    fn summary_names_both_ends() {
        let summary = DeliveryNotes::parse(THREE_LEGS).unwrap().route_summary().unwrap();
        assert_eq!(summary.origin, "A");
        assert_eq!(summary.destination, "D");
        assert_eq!(summary.legs.len(), 3);
        assert_eq!(summary.legs[2].delivery_company, "DHL");
    }

    #[test]
    fn toon_export_lists_every_leg() {
        let doc = DeliveryNotes::parse(THREE_LEGS).unwrap().to_toon().unwrap();
        assert!(doc.contains("origin: A"));
        assert!(doc.contains("destination: D"));
        assert!(doc.contains("Correios"));
        assert!(doc.contains("DHL"));
    }
}
