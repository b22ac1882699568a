use crate::{CliError, Result};
use colored::Colorize;
use kimsufi_core::{resolve_price, total_price, CatalogOption, OptionSet, PriceConfig};
use kimsufi_utils::{format_options, Formatter, PriceFormatter};
use std::fmt;
use std::str::FromStr;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayFormat {
    #[default]
    Table,
    Plain,
    Json,
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayFormat::Table => write!(f, "table"),
            DisplayFormat::Plain => write!(f, "plain"),
            DisplayFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for DisplayFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(DisplayFormat::Table),
            "plain" => Ok(DisplayFormat::Plain),
            "json" => Ok(DisplayFormat::Json),
            other => Err(CliError::InvalidInput(format!(
                "Unknown display format '{}', expected table, plain or json",
                other
            ))),
        }
    }
}

/// Table formatting utilities
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let max_widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            rows: Vec::new(),
            max_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.max_widths.len() {
                self.max_widths[i] = self.max_widths[i].max(cell.chars().count());
            }
        }
        self.rows.push(row);
    }

    /// Render without colors, one line per border or row
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.separator('┌', '┬', '┐'));
        lines.push(self.line(&self.headers));
        lines.push(self.separator('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.line(row));
        }
        lines.push(self.separator('└', '┴', '┘'));
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    fn separator(&self, left: char, middle: char, right: char) -> String {
        let cells: Vec<String> = self.max_widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, cells.join(&middle.to_string()), right)
    }

    fn line(&self, cells: &[String]) -> String {
        let mut line = String::from("│");
        for (i, width) in self.max_widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:<width$} │", cell, width = width));
        }
        line
    }
}

/// Build the table of catalog records with their price under `config`
pub fn records_table(records: &[CatalogOption], config: &PriceConfig) -> Table {
    let mut table = Table::new(vec![
        "Index".to_string(),
        "Family".to_string(),
        "Plan Code".to_string(),
        format!("Price ({})", config),
    ]);

    for (i, record) in records.iter().enumerate() {
        let price = resolve_price(record, config).map(|p| p.price_in_ucents);
        table.add_row(vec![
            (i + 1).to_string(),
            record.family().to_string(),
            record.plan_code().to_string(),
            PriceFormatter.format(price),
        ]);
    }

    table
}

/// Display catalog records with prices
pub fn display_records(
    records: &[CatalogOption],
    config: &PriceConfig,
    format: DisplayFormat,
) -> Result<()> {
    if records.is_empty() {
        println!("{}", "No options found.".yellow());
        return Ok(());
    }

    match format {
        DisplayFormat::Table => {
            records_table(records, config).print();
            println!(
                "{} {}",
                "Total:".bold(),
                PriceFormatter.format(total_price(records, config))
            );
        }
        DisplayFormat::Plain => {
            for record in records {
                println!("{}", record.option);
            }
        }
        DisplayFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }

    Ok(())
}

/// Build the table of combination rows, one column per family
pub fn combinations_table(rows: &[OptionSet]) -> Table {
    let families = rows.first().map(|row| row.families()).unwrap_or_default();

    let mut headers = vec!["#".to_string()];
    headers.extend(families.iter().cloned());
    let mut table = Table::new(headers);

    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(families.iter().map(|family| {
            row.get(family)
                .map(|o| o.plan_code.clone())
                .unwrap_or_else(|| "-".to_string())
        }));
        table.add_row(cells);
    }

    table
}

/// Display combination rows
pub fn display_combinations(rows: &[OptionSet], format: DisplayFormat) -> Result<()> {
    if rows.is_empty() {
        println!("{}", "No combinations.".yellow());
        return Ok(());
    }

    match format {
        DisplayFormat::Table => {
            combinations_table(rows).print();
            println!("{} combination(s)", rows.len());
        }
        DisplayFormat::Plain => {
            for row in rows {
                println!("{}", format_options(row));
            }
        }
        DisplayFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }

    Ok(())
}

/// Display a labelled option set
pub fn display_option_set(label: &str, options: &OptionSet, format: DisplayFormat) -> Result<()> {
    match format {
        DisplayFormat::Json => println!("{}", serde_json::to_string(options)?),
        DisplayFormat::Table | DisplayFormat::Plain => {
            println!("{} {}", format!("{}:", label).bold(), format_options(options))
        }
    }
    Ok(())
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
