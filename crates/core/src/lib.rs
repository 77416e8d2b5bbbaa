//! Domain logic for the metal roll inventory service.
//!
//! Everything in this crate is pure: no I/O, no database access. The `db`
//! and `api` crates depend on these types and functions.

pub mod datetime;
pub mod error;
pub mod range_filter;
pub mod roll;
pub mod stats;
pub mod types;
