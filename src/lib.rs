//! Staged file writes with per-path change history.
//!
//! Files are written into an in-memory [`areas::buffer::Buffer`] first and
//! flushed to disk later. With change logging enabled every write is also kept
//! as a snapshot, and any two snapshots of a path can be diffed line by line.

pub mod areas;
pub mod artifacts;
pub mod commands;
