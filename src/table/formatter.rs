use crate::dim::error::DimError;
use crate::table::builder::ConversionTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Render a conversion table in the requested format
pub fn format_table(table: &ConversionTable, format: OutputFormat) -> Result<String, DimError> {
    match format {
        OutputFormat::Text => Ok(format_text(table)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(table).map_err(|e| DimError::Format(e.to_string()))
        }
        OutputFormat::Toml => toml::to_string(table).map_err(|e| DimError::Format(e.to_string())),
    }
}

fn format_text(table: &ConversionTable) -> String {
    let base = table.base();
    let width = table.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut out = format!(
        "Base: length={} time={} mass={}\n",
        base.length, base.time, base.mass
    );
    for (symbol, factor) in table.iter() {
        out.push_str(&format!("  {:<width$}  {}\n", symbol, factor, width = width));
    }
    out
}
