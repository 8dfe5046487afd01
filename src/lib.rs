//! Sort an unordered pile of delivery notes into the single route they describe.
//!
//! Input is a text blob of `-deliveryNote` blocks, each a `from -> to` hop.
//! [`DeliveryNotes::parse`] builds the location graph and
//! [`DeliveryNotes::sorted_text`] renders the notes back in travel order.

pub mod api;
pub mod core;
pub mod error;

pub use crate::api::delivery_notes::{DeliveryNotes, RouteSummary};
pub use crate::core::format::NoteFormat;
pub use crate::core::graph::{GraphError, Location, RouteGraph};
pub use crate::core::note::{DeliveryNote, FieldSpec, ParseError};
pub use crate::error::{Error, Result};
