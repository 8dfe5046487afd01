pub mod types;
pub mod format;
pub mod note;
pub mod graph;
pub mod build;
pub mod resolve;
