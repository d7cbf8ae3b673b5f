//! Persistence layer for dashboard records.
//!
//! # Responsibility
//! - Define the key-value storage contract used by the core.
//! - Encode/decode the dashboard and theme records under their fixed keys.
//!
//! # Invariants
//! - Records are whole JSON documents; there are no partial writes.
//! - Decoding failures never yield a partially recovered state.

pub mod kv_repo;
pub mod snapshot_repo;
