// shared ids + format constants

/// Index of a location inside `RouteGraph::locations`.
pub type LocationId = usize;

/// Index of a delivery note inside `RouteGraph::notes`.
pub type NoteId = usize;

pub const NOTE_DELIMITER: &str = "-deliveryNote";
pub const FIELD_INDENT: &str = "    ";
