// text layout of a delivery note block
use serde::{Deserialize, Serialize};

use crate::core::types::{FIELD_INDENT, NOTE_DELIMITER};
use crate::error::Error;

/// Layout used when splitting input into blocks and when rendering notes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteFormat {
    /// Marker line that opens every note block.
    pub delimiter: String,
    /// Prefix written before each `field: value` line.
    pub indent: String,
}

impl Default for NoteFormat {
    fn default() -> Self {
        Self {
            delimiter: NOTE_DELIMITER.to_string(),
            indent: FIELD_INDENT.to_string(),
        }
    }
}

impl NoteFormat {
    //load from a TOON document, missing keys keep their defaults
    pub fn from_toon(doc: &str) -> Result<Self, Error> {
        let format: NoteFormat =
            toon_format::decode_default(doc).map_err(|e| Error::Config(e.to_string()))?;
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.delimiter.trim().is_empty() {
            return Err(Error::Config("note delimiter must not be blank".to_string()));
        }
        Ok(())
    }
}
