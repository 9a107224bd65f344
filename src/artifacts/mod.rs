//! Data structures and algorithms behind the buffer
//!
//! - `diff`: Myers' diff and line diff renderings
//! - `events`: notifications published while staging and flushing
//! - `history`: per-path snapshot history

pub mod diff;
pub mod events;
pub mod history;
