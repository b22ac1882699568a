use crate::{config::Config, ConfigCommands, Result};
use colored::Colorize;

/// Handles the `config` command for configuration management and inspection.
///
/// # Supported Operations
/// - **Show**: Display the configuration file content and the effective price configuration
/// - **Path**: Print the configuration file location
/// - **Get** / **Set**: Read or write one `section.name` key
/// - **Reset**: Drop every configured value
pub async fn handle(action: ConfigCommands, config: &Config) -> Result<()> {
    match action {
        ConfigCommands::Show => handle_show(config).await,
        ConfigCommands::Path => {
            println!("{}", config.config_path.display());
            Ok(())
        }
        ConfigCommands::Get { key } => handle_get(&key, config).await,
        ConfigCommands::Set { key, value } => handle_set(&key, &value, config).await,
        ConfigCommands::Reset => handle_reset(config).await,
    }
}

async fn handle_show(config: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".bold());
    println!("Configuration file: {}", config.config_path.display());
    println!();
    println!("{}", config.show_config());
    println!("Effective price configuration: {}", config.price_config());
    Ok(())
}

async fn handle_get(key: &str, config: &Config) -> Result<()> {
    match config.get(key)? {
        Some(value) => println!("{}", value),
        None => println!("{}", format!("{} is not set", key).yellow()),
    }
    Ok(())
}

async fn handle_set(key: &str, value: &str, config: &Config) -> Result<()> {
    let mut config = config.clone();
    config.set(key, value)?;
    config.save()?;
    println!("{} {} = {}", "✓".green(), key, value.trim());
    Ok(())
}

async fn handle_reset(config: &Config) -> Result<()> {
    let mut config = config.clone();
    config.reset();
    config.save()?;
    println!("{} Configuration reset to defaults", "✓".green());
    Ok(())
}
