//! # student-roster - Terminal Student Record Manager
//!
//! Keeps a roster of students (roll number, name, marks) in a plain text file, one record per
//! line, and edits it through a keyboard-driven terminal interface.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`store`] - Line-oriented record persistence behind the [`RecordStore`] trait
//! - [`presenter`] - Table rows and selection mirrored from the store
//! - [`dialog`] - Add, search, update and delete workflows
//! - [`input`] - Key translation into application actions
//! - [`ui`] - Display surface, view state and the ratatui implementation
//! - [`config`] - Defaults, TOML file and command-line overrides
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;
pub mod store;

// Interaction layers
pub mod dialog;
pub mod input;
pub mod presenter;
pub mod ui;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};

// Public API surface for external usage
pub use app::Application;
pub use config::Config;
pub use store::{FlatFileStore, InMemoryStore, Record, RecordStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
