//! checkin-core — Submission model, validation, storage and aggregation.
//!
//! This crate holds everything the check-in server needs that is not HTTP:
//! the data model, the payload validator, the in-memory store, the
//! aggregate statistics and the CSV export format.

pub mod error;
pub mod export;
pub mod model;
pub mod statistics;
pub mod store;
pub mod validate;
