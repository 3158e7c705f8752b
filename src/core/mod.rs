//! Core types for the knowledge base builder.

mod types;

pub use types::*;
