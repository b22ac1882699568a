//! # Kimsufi Core
//!
//! Core domain logic for assembling Kimsufi server orders.
//!
//! This crate contains pure business logic with no I/O dependencies:
//! - Catalog and order option models
//! - The family-keyed `OptionSet` collection
//! - Mandatory and cheapest option selection
//! - Combination generation across option families
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Deterministic**: Family groups are ordered by first appearance
//! - **Dependency-Free**: No I/O, networking, or persistence dependencies

pub mod combinations;
pub mod errors;
pub mod models;
pub mod options;
pub mod selection;

// Re-export commonly used types
pub use combinations::{cartesian_combinations, combinations, generate, CombinationMode};
pub use errors::{CoreError, Result};
pub use models::{
    CatalogOption, OptionPrice, OrderOption, PriceConfig, DEFAULT_PRICE_DURATION,
    DEFAULT_PRICING_MODE,
};
pub use options::OptionSet;
pub use selection::{
    cheapest_mandatory_options, cheapest_mandatory_options_with, mandatory_options,
    resolve_price, to_options, total_price, ExcludeFamilies, MandatoryFilter, SkipWhenChosen,
};
