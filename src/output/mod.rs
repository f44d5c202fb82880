//! Report renderers and persistence collaborators.
//!
//! Collaborators hold no credential logic: they receive rendered strings and
//! write them verbatim to a destination (terminal, file, or build header).

pub mod file;
pub mod header;
pub mod json;
pub mod terminal;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::RenderedCredentialSet;

/// Trait for rendering a credential report to an output format.
pub trait ReportRenderer {
    /// Render the credential set to a string.
    fn render(&self, set: &RenderedCredentialSet) -> String;
}

/// Errors while persisting rendered credentials.
///
/// A failed write never invalidates the already-computed credential values;
/// callers decide whether it is fatal.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
