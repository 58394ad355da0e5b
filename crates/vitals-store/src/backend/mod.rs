//! Storage backends for the biomarker store.

mod file;
mod memory;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

use vitals_model::BiomarkerMapping;

use crate::error::Result;

/// Where a [`BiomarkerStore`](crate::BiomarkerStore) keeps its mapping.
pub trait Persistence {
    /// Stored mapping, `None` when nothing has been saved.
    fn load(&self) -> Result<Option<BiomarkerMapping>>;

    /// Replace the stored mapping; `None` stores an empty state.
    fn save(&mut self, data: Option<&BiomarkerMapping>) -> Result<()>;
}
