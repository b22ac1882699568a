use crate::errors::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing duration used when no other is configured (monthly).
pub const DEFAULT_PRICE_DURATION: &str = "P1M";

/// Pricing mode used when no other is configured.
pub const DEFAULT_PRICING_MODE: &str = "default";

/// Separator of the textual `family=planCode` encoding.
pub const OPTION_SEPARATOR: char = '=';

/// One chosen add-on: a plan code within a family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOption {
    pub family: String,
    pub plan_code: String,
}

impl OrderOption {
    pub fn new(family: impl Into<String>, plan_code: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            plan_code: plan_code.into(),
        }
    }
}

impl fmt::Display for OrderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, OPTION_SEPARATOR, self.plan_code)
    }
}

impl FromStr for OrderOption {
    type Err = CoreError;

    /// Parse a `family=planCode` token. Anything other than exactly one
    /// separator is rejected with the whole token in the error.
    fn from_str(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split(OPTION_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(CoreError::malformed(token));
        }

        Ok(OrderOption::new(parts[0], parts[1]))
    }
}

/// Price of a catalog option under one billing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPrice {
    pub duration: String,
    pub pricing_mode: String,
    pub price_in_ucents: i64,
}

impl OptionPrice {
    pub fn new(
        duration: impl Into<String>,
        pricing_mode: impl Into<String>,
        price_in_ucents: i64,
    ) -> Self {
        Self {
            duration: duration.into(),
            pricing_mode: pricing_mode.into(),
            price_in_ucents,
        }
    }

    pub fn matches(&self, config: &PriceConfig) -> bool {
        self.duration == config.duration && self.pricing_mode == config.pricing_mode
    }
}

/// The (duration, pricing mode) key prices are compared under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceConfig {
    pub duration: String,
    pub pricing_mode: String,
}

impl PriceConfig {
    pub fn new(duration: impl Into<String>, pricing_mode: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            pricing_mode: pricing_mode.into(),
        }
    }
}

impl Default for PriceConfig {
    fn default() -> Self {
        PriceConfig::new(DEFAULT_PRICE_DURATION, DEFAULT_PRICING_MODE)
    }
}

impl fmt::Display for PriceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.duration, self.pricing_mode)
    }
}

/// Catalog record for one option of a server product, as the catalog API
/// returns it. Read-only input to the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOption {
    #[serde(flatten)]
    pub option: OrderOption,

    #[serde(default)]
    pub mandatory: bool,

    #[serde(default)]
    pub prices: Vec<OptionPrice>,
}

impl CatalogOption {
    pub fn new(option: OrderOption, mandatory: bool, prices: Vec<OptionPrice>) -> Self {
        Self {
            option,
            mandatory,
            prices,
        }
    }

    pub fn family(&self) -> &str {
        &self.option.family
    }

    pub fn plan_code(&self) -> &str {
        &self.option.plan_code
    }

    /// First price matching `config`, or `None` when the option cannot be
    /// priced under it.
    pub fn price_for(&self, config: &PriceConfig) -> Option<&OptionPrice> {
        self.prices.iter().find(|price| price.matches(config))
    }
}
