//! Shared contract types for the roster dashboard core
//!
//! Contains only what the presentation shell consumes: the record store and
//! its rows, the aggregate outputs, and the error kinds it must render
//! distinct messages for. Component-internal types stay in their component.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
