//! Stateful components
//!
//! - `buffer`: the write buffer and its origin-scoped views
//! - `change_log`: registry of per-path histories
//! - `flush`: lazy iterator writing buffered files to disk
//! - `options`: settings fixed at buffer creation
//! - `session`: wiring used by the command line
//! - `workspace`: file system reads and writes

pub mod buffer;
pub mod change_log;
pub mod flush;
pub mod options;
pub mod session;
pub mod workspace;
