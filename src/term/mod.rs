//! Terminal rendering module.
//!
//! A deliberately thin layer: the core never depends on drawing success,
//! and everything here is a full-frame redraw of pure core state.

pub mod renderer;

pub use renderer::TerminalRenderer;
