use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dex_info_helpers::{
    checksum_address, format_number, format_time, formatted_num_str, formatted_percent,
    get_2day_percent_change, get_percent_change, init_logging, to_k, to_nice_date,
    to_nice_date_year, CurrencyFormatter, DisplayConfig, Error, ExplorerUrls,
};

#[derive(Parser)]
#[command(name = "dex-info")]
#[command(about = "Dashboard formatting helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing display.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Format a number, optionally as USD
    Num {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        usd: bool,
    },

    /// Format an amount with the configured currency
    Currency {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Scale a number to K / M
    K {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Render with fixed decimals
        #[arg(long)]
        fixed: bool,
        /// Drop decimals when rendering fixed
        #[arg(long)]
        cutoff: bool,
    },

    /// Format a percentage (5.2 means 5.2%)
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Percent change between two values
    Change {
        #[arg(allow_negative_numbers = true)]
        now: f64,
        #[arg(allow_negative_numbers = true)]
        past: f64,
    },

    /// Compare the last two 24 hour windows
    Change2d {
        #[arg(allow_negative_numbers = true)]
        now: f64,
        #[arg(allow_negative_numbers = true)]
        past24h: f64,
        #[arg(allow_negative_numbers = true)]
        past48h: f64,
    },

    /// Relative time for a Unix timestamp
    Ago {
        #[arg(allow_negative_numbers = true)]
        unix: i64,
    },

    /// UTC calendar date for a Unix timestamp
    Date {
        #[arg(allow_negative_numbers = true)]
        unix: i64,
        /// Include the full month name and year
        #[arg(long)]
        year: bool,
    },

    /// Validate and checksum an address
    Address { value: String },

    /// Block explorer link
    Link { kind: LinkKind, id: String },

    /// Group the integer digits of a number
    Group {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Print the effective configuration
    Config,
}

#[derive(ValueEnum, Clone, Copy)]
enum LinkKind {
    Tx,
    Address,
    Token,
    Block,
}

fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(dir) => DisplayConfig::load_from(dir)?,
        None => DisplayConfig::load()?,
    };

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    init_logging(level);

    match cli.command {
        Commands::Num { value, usd } => println!("{}", formatted_num_str(&value, usd)),
        Commands::Currency { value } => {
            println!("{}", CurrencyFormatter::new(&config.currency).format(value))
        }
        Commands::K {
            value,
            fixed,
            cutoff,
        } => println!("{}", to_k(value, fixed, cutoff)),
        Commands::Percent { value } => {
            let percent = formatted_percent(value);
            println!("{} ({})", percent, percent.sentiment);
        }
        Commands::Change { now, past } => println!("{}", get_percent_change(now, past)),
        Commands::Change2d {
            now,
            past24h,
            past48h,
        } => {
            let change = get_2day_percent_change(now, past24h, past48h);
            println!("window delta: {}", change.window_delta);
            println!("adjusted change: {}", formatted_percent(change.adjusted_change));
        }
        Commands::Ago { unix } => println!("{}", format_time(unix)),
        Commands::Date { unix, year } => {
            let date = if year {
                to_nice_date_year(unix)
            } else {
                to_nice_date(unix)
            };
            println!("{}", date);
        }
        Commands::Address { value } => match checksum_address(&value) {
            Ok(address) => println!("{}", address),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        Commands::Link { kind, id } => {
            let urls = ExplorerUrls::from_config(&config.explorer);
            let link = match kind {
                LinkKind::Tx => urls.show_transaction(&id),
                LinkKind::Address => urls.show_address(&id),
                LinkKind::Token => urls.show_token(&id),
                LinkKind::Block => match id.parse::<u64>() {
                    Ok(block) => urls.show_block(block),
                    Err(_) => {
                        eprintln!("Block must be a number: {}", id);
                        std::process::exit(1);
                    }
                },
            };
            println!("{}", link);
        }
        Commands::Group { value } => println!("{}", format_number(value)),
        Commands::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}
