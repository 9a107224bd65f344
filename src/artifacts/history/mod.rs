//! Per-path change history
//!
//! - `snapshot`: immutable recorded contents with origin and capture time
//! - `file_history`: append-only snapshot log with indexed access and diffing

pub mod file_history;
pub mod snapshot;
