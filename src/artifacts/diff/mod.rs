//! Line diffing
//!
//! - `diff_algorithm`: Myers' shortest edit script over arbitrary sequences
//! - `line_diff`: text diff between two snapshots with plain and ANSI renderings

pub mod diff_algorithm;
pub mod line_diff;
