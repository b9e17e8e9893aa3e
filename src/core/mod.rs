pub mod emitter;
pub mod report;

pub use crate::domain::model::{Document, DocumentSet, EmissionResult};
pub use crate::domain::ports::{DocumentSource, Storage};
pub use crate::utils::error::Result;
