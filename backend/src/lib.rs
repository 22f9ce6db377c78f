//! # Portal Backend
//!
//! Contains all non-UI logic of the local-service client portal.
//!
//! Nothing in this crate touches the DOM, the network or a timer, so it builds
//! for `wasm32-unknown-unknown` (driven by the Yew frontend) and natively
//! (unit tests, static host).
//!
//! ## Architecture
//!
//! ```text
//! Presentation Shell (Yew frontend)
//!     ↓
//! Domain (Portal container, booking/profile workflows)
//!     ↓
//! Storage (RecordStore over a KeyValueStore port)
//! ```
//!
//! Branding ([`brand`], [`config`]) sits beside the domain and feeds the UI
//! display values only. [`manifest`] describes the installable app.

pub mod brand;
pub mod config;
pub mod domain;
pub mod manifest;
pub mod storage;

pub use brand::{resolve_business_name, BrandContext};
pub use config::{PortalConfig, PortalVariant};
pub use domain::{Portal, SystemClock};
pub use storage::{KeyValueStore, MemoryStore, RecordStore};
