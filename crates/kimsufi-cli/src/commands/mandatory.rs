use crate::{
    catalog::load_catalog, commands::resolve_format, config::Config, display::display_records,
    CliError, Result,
};
use clap::Args;
use kimsufi_core::{mandatory_options, ExcludeFamilies, MandatoryFilter, SkipWhenChosen};
use log::debug;
use std::path::PathBuf;

/// Command-line arguments for the `mandatory` command.
///
/// Lists every mandatory option of a catalog in catalog order, optionally
/// narrowed by family filters.
///
/// # Examples
/// ```bash
/// kimsufi-order mandatory --catalog 24ska01.json
/// kimsufi-order mandatory --catalog 24ska01.json --exclude bandwidth
/// kimsufi-order mandatory --catalog 24ska01.json --skip-when storage:system-storage
/// ```
#[derive(Args)]
pub struct MandatoryArgs {
    /// Catalog JSON file
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Drop every option of this family (repeatable)
    #[arg(long, value_name = "FAMILY")]
    pub exclude: Vec<String>,

    /// Drop FAMILY once an option of CHOSEN was kept (repeatable)
    #[arg(long, value_name = "FAMILY:CHOSEN")]
    pub skip_when: Vec<String>,

    /// Output format: table, plain or json
    #[arg(long)]
    pub format: Option<String>,
}

/// Build the filter chain from the command flags, `None` when no flag is set
pub fn build_filter(args: &MandatoryArgs) -> Result<Option<Vec<Box<dyn MandatoryFilter>>>> {
    let mut filters: Vec<Box<dyn MandatoryFilter>> = Vec::new();

    if !args.exclude.is_empty() {
        filters.push(Box::new(ExcludeFamilies::new(args.exclude.iter().cloned())));
    }

    for rule in &args.skip_when {
        let (family, chosen) = rule
            .split_once(':')
            .filter(|(family, chosen)| !family.is_empty() && !chosen.is_empty())
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Invalid --skip-when '{}', expected FAMILY:CHOSEN",
                    rule
                ))
            })?;
        filters.push(Box::new(SkipWhenChosen::new(family, chosen)));
    }

    Ok((!filters.is_empty()).then_some(filters))
}

/// Handles the `mandatory` command
pub async fn handle(args: MandatoryArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let filter = build_filter(&args)?;
    let records = load_catalog(&args.catalog).await?;

    let mandatory = mandatory_options(
        &records,
        filter.as_ref().map(|f| f as &dyn MandatoryFilter),
    );
    debug!(
        "{} of {} records are mandatory",
        mandatory.len(),
        records.len()
    );

    display_records(&mandatory, &config.price_config(), format)
}
