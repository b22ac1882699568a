pub mod cheapest;
pub mod combinations;
pub mod config;
pub mod mandatory;
pub mod split;

use crate::{config::Config, display::DisplayFormat, Result};

/// Output format: the `--format` flag when given, the configured one otherwise
pub(crate) fn resolve_format(flag: Option<&str>, config: &Config) -> Result<DisplayFormat> {
    match flag {
        Some(format) => format.parse(),
        None => config.display_format(),
    }
}
