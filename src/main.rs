use clap::{Parser, Subcommand};
use dimcalc::config::{Config, DEFAULT_CONFIG_FILE};
use dimcalc::dim::{self, Family, TaggedNumber, Unit};
use dimcalc::table::{format_table, OutputFormat};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dimcalc")]
#[command(about = "Unit conversion tables and dimension-checked arithmetic", long_about = None)]
struct Cli {
    /// Config file (default: ./dimcalc.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the conversion table for a base system
    Table {
        /// Base length unit (e.g., "ft")
        #[arg(long)]
        length: Option<String>,

        /// Base time unit (e.g., "h")
        #[arg(long)]
        time: Option<String>,

        /// Base mass unit (e.g., "lbm")
        #[arg(long)]
        mass: Option<String>,

        /// Output format: text, json or toml
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a value between two compatible units
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Add two quantities, checking their dimensions
    Add {
        #[arg(allow_hyphen_values = true)]
        left_value: f64,
        left_unit: String,
        #[arg(allow_hyphen_values = true)]
        right_value: f64,
        right_unit: String,
    },

    /// List registered units
    Units {
        /// Only list one family (length, mass, time, force)
        family: Option<Family>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Table {
            length,
            time,
            mass,
            format,
            output,
        } => load_config(cli.config.as_ref()).and_then(|config| {
            print_table(
                &config,
                length.as_deref(),
                time.as_deref(),
                mass.as_deref(),
                format,
                output.as_ref(),
            )
        }),
        Commands::Convert { value, from, to } => convert(value, &from, &to),
        Commands::Add {
            left_value,
            left_unit,
            right_value,
            right_unit,
        } => add(left_value, &left_unit, right_value, &right_unit),
        Commands::Units { family } => {
            list_units(family);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Ok(Config::load_from_file(&default_path)?)
            } else {
                warn!("No {} found, using SI base units", DEFAULT_CONFIG_FILE);
                Ok(Config::empty())
            }
        }
    }
}

fn print_table(
    config: &Config,
    length: Option<&str>,
    time: Option<&str>,
    mass: Option<&str>,
    format: Option<OutputFormat>,
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let base = config.base_with_overrides(length, time, mass);
    let table = base.build_table()?;
    let rendered = format_table(&table, format.unwrap_or(config.output.format))?;

    if let Some(output_path) = output {
        std::fs::write(output_path, rendered)?;
        println!("Conversion table written to {}", output_path.display());
    } else {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

fn convert(value: f64, from: &str, to: &str) -> Result<(), Box<dyn std::error::Error>> {
    let quantity = TaggedNumber::with_symbol(value, from)?;
    let target = Unit::from_symbol(to)?;
    println!("{}", quantity.convert_to(&target)?);
    Ok(())
}

fn add(
    left_value: f64,
    left_unit: &str,
    right_value: f64,
    right_unit: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let left = TaggedNumber::with_symbol(left_value, left_unit)?;
    let right = TaggedNumber::with_symbol(right_value, right_unit)?;
    println!("{}", left.try_add(&right)?);
    Ok(())
}

fn list_units(family: Option<Family>) {
    let families: Vec<Family> = match family {
        Some(f) => vec![f],
        None => Family::ALL.to_vec(),
    };

    for family in families {
        println!("{} [{}]:", family, family.dims());
        for symbol in dim::symbols(family) {
            if let Ok(def) = dim::registry_entry(family, symbol) {
                println!("  - {} = {} (priority {})", symbol, def.scale, def.priority);
            }
        }
    }
}
