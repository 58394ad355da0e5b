//! Persistent storage for the evaluated biomarker mapping.
//!
//! [`BiomarkerStore`] owns the current mapping and an injected
//! [`Persistence`] backend: loaded on open, saved on every `set`/`clear`.
//!
//! # Backends
//!
//! - [`JsonFileBackend`]: `<dir>/biomarker-storage.json`, written atomically
//! - [`MemoryBackend`]: nothing touches disk
//!
//! # Example
//!
//! ```no_run
//! use vitals_store::{BiomarkerStore, JsonFileBackend};
//!
//! let mut store = BiomarkerStore::open(JsonFileBackend::in_dir(".vitals"))?;
//! store.set([("wbc", 6.2)].into_iter().collect())?;
//! println!("{}", store.overall_status());
//! # Ok::<(), vitals_store::PersistenceError>(())
//! ```

mod backend;
mod envelope;
mod error;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, Persistence};
pub use envelope::{CURRENT_SCHEMA_VERSION, STORAGE_NAME, StorageEnvelope, StoredState};
pub use error::{PersistenceError, Result};
pub use store::BiomarkerStore;
