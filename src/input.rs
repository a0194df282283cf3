//! Input subsystem.
//!
//! Modules outside this crate should import from `crate::input` rather than reaching into
//! submodules.

pub mod service;

pub use service::{InputAction, InputMode, InputService};
