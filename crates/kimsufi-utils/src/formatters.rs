use kimsufi_core::{OptionSet, OrderOption};

/// Micro-cents in one currency unit.
pub const UCENTS_PER_UNIT: i64 = 100_000_000;

/// Trait for formatting different types of data
pub trait Formatter<T> {
    fn format(&self, input: T) -> String;
}

/// Price formatter: ucents to a decimal amount with two fractional digits.
/// No currency is attached, the catalog decides that.
pub struct PriceFormatter;

impl Formatter<i64> for PriceFormatter {
    fn format(&self, ucents: i64) -> String {
        // Round half away from zero to the cent
        let cents_scale = UCENTS_PER_UNIT / 100;
        let sign = if ucents < 0 { "-" } else { "" };
        let abs = ucents.unsigned_abs();
        let cents = (abs + cents_scale as u64 / 2) / cents_scale as u64;
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Formatter<Option<i64>> for PriceFormatter {
    fn format(&self, ucents: Option<i64>) -> String {
        match ucents {
            Some(ucents) => self.format(ucents),
            None => "N/A".to_string(),
        }
    }
}

/// Option formatter: `family=planCode` tokens joined by commas
pub struct OptionFormatter;

impl Formatter<&OptionSet> for OptionFormatter {
    fn format(&self, options: &OptionSet) -> String {
        options
            .iter()
            .map(OrderOption::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// Convenience functions
pub fn format_price(ucents: i64) -> String {
    PriceFormatter.format(ucents)
}

pub fn format_options(options: &OptionSet) -> String {
    OptionFormatter.format(options)
}
