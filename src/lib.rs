pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, manifest::ManifestSource, CliConfig};
pub use content::BuiltinSource;
pub use core::{
    emitter::DocumentEmitter,
    report::{EmissionReport, ReportFormat},
    Document, DocumentSet, DocumentSource, EmissionResult,
};
pub use utils::error::{DocgenError, Result};
