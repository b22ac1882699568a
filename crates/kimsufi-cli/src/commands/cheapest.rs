use crate::{
    catalog::load_catalog, commands::resolve_format, config::Config, display::display_records,
    Result,
};
use clap::Args;
use kimsufi_core::{cheapest_mandatory_options_with, PriceConfig};
use log::info;
use std::path::PathBuf;

/// Command-line arguments for the `cheapest` command.
///
/// Picks, for every mandatory family, the option with the lowest price under
/// one billing configuration. Options without a price under that configuration
/// never displace an already selected one.
///
/// # Examples
/// ```bash
/// kimsufi-order cheapest --catalog 24ska01.json
/// kimsufi-order cheapest --catalog 24ska01.json --duration P12M --pricing-mode degressivity12
/// ```
#[derive(Args)]
pub struct CheapestArgs {
    /// Catalog JSON file
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Billing duration to compare prices under (overrides the configuration)
    #[arg(long)]
    pub duration: Option<String>,

    /// Pricing mode to compare prices under (overrides the configuration)
    #[arg(long)]
    pub pricing_mode: Option<String>,

    /// Output format: table, plain or json
    #[arg(long)]
    pub format: Option<String>,
}

/// Price configuration for this run: flags over configuration
pub fn effective_price_config(args: &CheapestArgs, config: &Config) -> PriceConfig {
    let configured = config.price_config();
    PriceConfig::new(
        args.duration.clone().unwrap_or(configured.duration),
        args.pricing_mode.clone().unwrap_or(configured.pricing_mode),
    )
}

/// Handles the `cheapest` command
pub async fn handle(args: CheapestArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let price_config = effective_price_config(&args, config);
    let records = load_catalog(&args.catalog).await?;

    info!("Comparing prices under {}", price_config);
    let cheapest = cheapest_mandatory_options_with(&records, &price_config);

    display_records(&cheapest, &price_config, format)
}
