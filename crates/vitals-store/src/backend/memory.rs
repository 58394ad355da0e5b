//! In-memory backend for tests and ephemeral sessions.

use vitals_model::BiomarkerMapping;

use super::Persistence;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Option<BiomarkerMapping>,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds a mapping.
    pub fn with_data(data: BiomarkerMapping) -> Self {
        Self {
            data: Some(data),
            saves: 0,
        }
    }

    /// Number of saves performed.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Persistence for MemoryBackend {
    fn load(&self) -> Result<Option<BiomarkerMapping>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: Option<&BiomarkerMapping>) -> Result<()> {
        self.data = data.cloned();
        self.saves += 1;
        Ok(())
    }
}
