//! Burst detection common types and errors.
//!
//! This crate provides the foundational types shared across bd-core:
//! - The unified [`Error`] type with stable codes and categories
//! - The [`Result`] alias used throughout the workspace

pub mod error;

pub use error::{Error, ErrorCategory, Result};
