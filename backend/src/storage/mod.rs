//! # Storage Module
//!
//! Local persistence for the portal's two record collections.
//!
//! The domain layer never talks to browser storage directly. It goes through
//! the [`KeyValueStore`] port, so the same workflows run against `localStorage`
//! in the browser and against [`MemoryStore`] in tests.
//!
//! ## Layout
//!
//! - **Bookings** live under `nexus_vault_data`
//! - **Profiles** live under `nexus_patient_data`
//!
//! Each slot holds the whole collection as one JSON array. Every mutation
//! rewrites the full array; there is no delta log.

pub mod memory;
pub mod record_store;
pub mod traits;

pub use memory::MemoryStore;
pub use record_store::{Record, RecordStore, Slot, Snapshot, StoreError};
pub use traits::KeyValueStore;
