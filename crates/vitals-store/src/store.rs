//! The biomarker store.

use vitals_eval::{Evaluation, overall_status};
use vitals_model::{BiomarkerMapping, OverallStatus};

use crate::backend::Persistence;
use crate::error::Result;

/// Holds the current mapping and keeps its backend in sync.
///
/// The mapping is loaded once on [`open`](Self::open) and saved on every
/// change. Updates replace the mapping wholesale.
#[derive(Debug)]
pub struct BiomarkerStore<P> {
    backend: P,
    data: Option<BiomarkerMapping>,
}

impl<P: Persistence> BiomarkerStore<P> {
    pub fn open(backend: P) -> Result<Self> {
        let data = backend.load()?;
        tracing::debug!(
            values = data.as_ref().map_or(0, BiomarkerMapping::len),
            "opened biomarker store"
        );
        Ok(Self { backend, data })
    }

    pub fn get(&self) -> Option<&BiomarkerMapping> {
        self.data.as_ref()
    }

    /// Replace the mapping and save it.
    ///
    /// The in-memory value only changes once the save succeeded.
    pub fn set(&mut self, mapping: BiomarkerMapping) -> Result<()> {
        self.backend.save(Some(&mapping))?;
        self.data = Some(mapping);
        Ok(())
    }

    /// Drop the mapping and save the empty state.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.save(None)?;
        self.data = None;
        Ok(())
    }

    pub fn overall_status(&self) -> OverallStatus {
        overall_status(self.get())
    }

    /// Full evaluation of the current mapping, if any.
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.get().map(Evaluation::of)
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }
}
