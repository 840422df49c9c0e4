//! gridfall - a terminal falling-block puzzle
//!
//! The `core` module holds the rules engine (grid, pieces, scoring); it is
//! pure and fully testable. The `term`, `input` and `persist` modules are
//! the thin collaborators around it: drawing, key mapping, and the
//! best-result record.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
