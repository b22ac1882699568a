use crate::{commands::resolve_format, config::Config, display::display_option_set, Result};
use clap::Args;
use kimsufi_utils::parse_option_lists;

/// Command-line arguments for the `split` command.
///
/// Separates the options using one plan code from all the others, keeping
/// their relative order.
///
/// # Examples
/// ```bash
/// kimsufi-order split --options memory=ram-64g,storage=ssd-1 --plan-code ram-64g
/// ```
#[derive(Args)]
pub struct SplitArgs {
    /// Options as family=planCode, comma separated (repeatable)
    #[arg(short, long, required = true)]
    pub options: Vec<String>,

    /// Plan code to split on
    #[arg(short, long)]
    pub plan_code: String,

    /// Output format: table, plain or json
    #[arg(long)]
    pub format: Option<String>,
}

/// Handles the `split` command
pub async fn handle(args: SplitArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let options = parse_option_lists(&args.options)?;

    let (matching, other) = options.split_by_plan_code(&args.plan_code);

    display_option_set("matching", &matching, format)?;
    display_option_set("other", &other, format)
}
