use crate::errors::{ParseError, Result};
use kimsufi_core::{CatalogOption, OptionSet};
use log::debug;
use serde_json::Value;

/// Trait for parsing textual inputs into domain values
pub trait Parser {
    type Output;

    fn parse(&self, input: &str) -> Result<Self::Output>;
}

/// Option list parser
///
/// Accepts `family=planCode` tokens separated by commas and/or whitespace,
/// e.g. `"memory=ram-32g, storage=softraid-2x480ssd"`.
pub struct OptionListParser;

impl Parser for OptionListParser {
    type Output = OptionSet;

    fn parse(&self, input: &str) -> Result<Self::Output> {
        let tokens = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        Ok(OptionSet::from_tokens(tokens)?)
    }
}

/// Catalog parser
///
/// Decodes either a bare JSON array of catalog records or an object carrying
/// them under `options`, the shape the order catalog endpoint answers with.
pub struct CatalogParser;

impl Parser for CatalogParser {
    type Output = Vec<CatalogOption>;

    fn parse(&self, input: &str) -> Result<Self::Output> {
        let value: Value = serde_json::from_str(input)?;

        let records = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => map
                .remove("options")
                .ok_or_else(|| ParseError::MissingField("options".to_string()))?,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "catalog must be an array or an object with options".to_string(),
                )
                .into())
            }
        };

        let records: Vec<CatalogOption> = serde_json::from_value(records)?;
        debug!("Parsed {} catalog records", records.len());
        Ok(records)
    }
}

// Convenience functions
pub fn parse_option_list(input: &str) -> Result<OptionSet> {
    OptionListParser.parse(input)
}

/// Parse several option lists (one per CLI occurrence) into a single set.
pub fn parse_option_lists<S: AsRef<str>>(inputs: &[S]) -> Result<OptionSet> {
    let mut options = OptionSet::new();
    for input in inputs {
        options.extend(OptionListParser.parse(input.as_ref())?);
    }
    Ok(options)
}

pub fn parse_catalog(input: &str) -> Result<Vec<CatalogOption>> {
    CatalogParser.parse(input)
}
