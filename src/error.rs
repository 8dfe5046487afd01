use thiserror::Error;

use crate::core::graph::GraphError;
use crate::core::note::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid note format: {0}")]
    Config(String),

    #[error("cannot encode route: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
