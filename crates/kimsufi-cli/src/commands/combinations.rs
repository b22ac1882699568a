use crate::{
    catalog::load_catalog, commands::resolve_format, config::Config,
    display::display_combinations, Result,
};
use clap::Args;
use kimsufi_core::{
    cheapest_mandatory_options_with, generate, to_options, CombinationMode, OptionSet,
};
use kimsufi_utils::parse_option_lists;
use log::{debug, warn};
use std::path::PathBuf;

/// Command-line arguments for the `combinations` command.
///
/// Every family given several plan codes is a set of alternatives; each
/// output row picks one plan code per family.
///
/// # Row layout
/// - **Default**: every family cycles through its alternatives with its own
///   period. With unequal family sizes some pairings repeat and others are
///   never produced.
/// - **--cartesian**: the full cross-product, each pairing exactly once.
#[derive(Args)]
pub struct CombinationsArgs {
    /// Options as family=planCode, comma separated (repeatable)
    #[arg(short, long, required = true)]
    pub options: Vec<String>,

    /// Catalog JSON file; completes rows with the cheapest mandatory options
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Enumerate the full cross-product instead of cycling families
    #[arg(long)]
    pub cartesian: bool,

    /// Output format: table, plain or json
    #[arg(long)]
    pub format: Option<String>,
}

impl CombinationsArgs {
    pub fn mode(&self) -> CombinationMode {
        if self.cartesian {
            CombinationMode::Cartesian
        } else {
            CombinationMode::Cycling
        }
    }
}

/// Generate rows and complete each one with `defaults` for missing families
pub fn build_rows(
    options: &OptionSet,
    defaults: &OptionSet,
    mode: CombinationMode,
) -> Vec<OptionSet> {
    generate(mode, options)
        .into_iter()
        .map(|row| row.merged(defaults.iter().cloned()))
        .collect()
}

/// Handles the `combinations` command
pub async fn handle(args: CombinationsArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let options = parse_option_lists(&args.options)?;

    let defaults = match &args.catalog {
        Some(path) => {
            let records = load_catalog(path).await?;
            to_options(&cheapest_mandatory_options_with(&records, &config.price_config()))
        }
        None => OptionSet::new(),
    };

    let mode = args.mode();
    let rows = build_rows(&options, &defaults, mode);
    debug!(
        "{} {} row(s) over {} families",
        rows.len(),
        mode,
        options.groups().len()
    );

    if mode == CombinationMode::Cycling {
        let sizes: Vec<usize> = options.groups().iter().map(|(_, b)| b.len()).collect();
        if sizes.windows(2).any(|w| w[0] != w[1]) {
            warn!(
                "Family sizes differ ({:?}): some rows repeat, use --cartesian for every pairing",
                sizes
            );
        }
    }

    display_combinations(&rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_completed_with_defaults() {
        let options = OptionSet::from_tokens(["memory=a", "memory=b"]).unwrap();
        let defaults = OptionSet::from_tokens(["memory=z", "storage=x"]).unwrap();

        let rows = build_rows(&options, &defaults, CombinationMode::Cycling);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].plan_codes(), vec!["a", "x"]);
        assert_eq!(rows[1].plan_codes(), vec!["b", "x"]);
    }

    #[test]
    fn test_mode_from_flag() {
        let mut args = CombinationsArgs {
            options: vec!["memory=a".to_string()],
            catalog: None,
            cartesian: false,
            format: None,
        };
        assert_eq!(args.mode(), CombinationMode::Cycling);

        args.cartesian = true;
        assert_eq!(args.mode(), CombinationMode::Cartesian);
    }
}
