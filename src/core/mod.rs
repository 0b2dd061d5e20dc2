//! Shared types, error taxonomy and line-oriented file I/O.

pub mod error;
pub mod input;
pub mod output;
pub mod types;
