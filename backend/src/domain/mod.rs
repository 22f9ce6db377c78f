//! # Domain Module
//!
//! Business logic of the portal, independent of any UI framework or
//! storage substrate.
//!
//! ## Module Organization
//!
//! - **booking_workflow**: draft/confirm/cancel/delete state machine for bookings
//! - **profile_workflow**: create/edit/delete flow for patient or pet profiles
//! - **portal**: the application-state container wiring both workflows to storage
//! - **schedule**: bookable dates and time slots per deployment
//! - **catalog**: services and intake categories per deployment
//! - **notifications**: toast messages and the single-slot toast model
//! - **ids** / **clock**: record id assignment and time source
//!
//! ## Business Rules
//!
//! - New records are prepended; collections are newest-first
//! - Ids are unique within a collection, even for records created in the same millisecond
//! - Confirming needs both a date and a time; saving a profile needs a non-blank name
//! - Deleting or editing a record that no longer exists is a no-op, never an error
//! - Every mutation rewrites the whole collection in storage

pub mod booking_workflow;
pub mod catalog;
pub mod clock;
pub mod ids;
pub mod notifications;
pub mod portal;
pub mod profile_workflow;
pub mod schedule;

pub use booking_workflow::*;
pub use clock::*;
pub use ids::*;
pub use notifications::*;
pub use portal::*;
pub use profile_workflow::*;
pub use schedule::*;
