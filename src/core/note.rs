// delivery note record: schema table, block parser, block serializer
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::format::NoteFormat;

/// One directed transport hop between two named locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNote {
    pub mean_of_transportation: String,
    pub from: String,
    pub to: String,
    pub delivery_company: String,
}

/// A declared note field: the name used in the text format plus its accessors.
pub struct FieldSpec {
    pub name: &'static str,
    /// An empty value is rejected for required fields.
    pub required: bool,
    pub get: fn(&DeliveryNote) -> &str,
    pub set: fn(&mut DeliveryNote, String),
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input error! Cannot recognize \"{line}\".")]
    UnrecognizedField { line: String },
}

//field names joined into one alternation; the value may be empty
static FIELD_LINE: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<String> = DeliveryNote::FIELDS
        .iter()
        .map(|f| regex::escape(f.name))
        .collect();
    let pattern = format!(r"^\s*({})\s*:\s*(.*?)\s*$", names.join("|"));
    Regex::new(&pattern).expect("field line pattern is built from static names")
});

impl DeliveryNote {
    /// Declared fields in rendering order. Adding a row here is enough for the
    /// parser and the serializer to pick the field up.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "meanOfTransportation",
            required: false,
            get: |n| n.mean_of_transportation.as_str(),
            set: |n, v| n.mean_of_transportation = v,
        },
        FieldSpec {
            name: "from",
            required: true,
            get: |n| n.from.as_str(),
            set: |n, v| n.from = v,
        },
        FieldSpec {
            name: "to",
            required: true,
            get: |n| n.to.as_str(),
            set: |n, v| n.to = v,
        },
        FieldSpec {
            name: "deliveryCompany",
            required: false,
            get: |n| n.delivery_company.as_str(),
            set: |n, v| n.delivery_company = v,
        },
    ];

    pub fn new(
        mean_of_transportation: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        delivery_company: impl Into<String>,
    ) -> Self {
        Self {
            mean_of_transportation: mean_of_transportation.into(),
            from: from.into(),
            to: to.into(),
            delivery_company: delivery_company.into(),
        }
    }

    pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    /// Parse the body of one note block (the delimiter line already stripped).
    ///
    /// Returns `Ok(None)` when the block holds nothing but whitespace, which is
    /// what splitting produces before the first delimiter. Blank lines inside a
    /// block are ignored; every other line must be a declared `field: value`.
    pub fn parse_block(block: &str) -> Result<Option<DeliveryNote>, ParseError> {
        let block = block.trim();
        if block.is_empty() {
            return Ok(None);
        }

        let mut note = DeliveryNote::default();
        for line in block.lines().filter(|l| !l.trim().is_empty()) {
            note.load_field(line)?;
        }
        Ok(Some(note))
    }

    fn load_field(&mut self, line: &str) -> Result<(), ParseError> {
        let unrecognized = || ParseError::UnrecognizedField {
            line: line.to_string(),
        };

        let caps = FIELD_LINE.captures(line).ok_or_else(unrecognized)?;
        let (name, value) = match (caps.get(1), caps.get(2)) {
            (Some(n), Some(v)) => (n.as_str(), v.as_str()),
            _ => return Err(unrecognized()),
        };
        let spec = Self::field_spec(name).ok_or_else(unrecognized)?;
        if spec.required && value.is_empty() {
            return Err(unrecognized());
        }
        (spec.set)(self, value.to_string());
        Ok(())
    }

    /// Render the note as a block: delimiter line, then one line per declared field.
    pub fn to_block(&self, format: &NoteFormat) -> String {
        let mut out = String::new();
        out.push_str(&format.delimiter);
        out.push('\n');
        for field in Self::FIELDS {
            out.push_str(&format.indent);
            out.push_str(field.name);
            out.push_str(": ");
            out.push_str((field.get)(self));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for DeliveryNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_block(&NoteFormat::default()))
    }
}
