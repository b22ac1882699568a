//! # Kimsufi Utils
//!
//! Text-level adapters around the core: `family=planCode` option lists,
//! catalog JSON decoding and human-readable formatting of prices and options.

pub mod errors;
pub mod formatters;
pub mod parsers;

// Re-export common types for convenience
pub use errors::*;
pub use formatters::*;
pub use parsers::*;
