//! geoplaces-rs: workspace umbrella; re-exports [`geoplaces_core`] for the demos.
pub use geoplaces_core::*;
