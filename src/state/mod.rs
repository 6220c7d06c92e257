//! State Management
//!
//! Global reactive state, session persistence, reconciliation actions,
//! and derived statistics.

pub mod actions;
pub mod global;
pub mod session;
pub mod stats;

pub use global::{provide_global_state, GlobalState, Note, Problem};
pub use session::Session;
