//! Common utilities module
//!
//! Shared error types used across the conversion pipeline.

pub mod error;

pub use error::{ConversionError, Result};
