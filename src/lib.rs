pub mod config;
pub mod error;
pub mod utils;

// Logging setup - optional via "cli" feature
#[cfg(feature = "cli")]
pub mod logging;

pub use crate::config::{CurrencyConfig, DisplayConfig, ExplorerConfig};
pub use crate::error::Error;

pub use crate::utils::formatting::{
    format_number, formatted_num, formatted_num_str, shorten_address, to_fixed, to_k,
    usd_formatter, CurrencyFormatter, FormattedNum, Magnitude,
};
pub use crate::utils::links::ExplorerUrls;
pub use crate::utils::percent::{
    formatted_percent, get_2day_percent_change, get_percent_change, FormattedPercent, Sentiment,
    WindowChange,
};
pub use crate::utils::time::{format_time, format_time_since, to_nice_date, to_nice_date_year};
pub use crate::utils::validation::{
    checksum_address, is_address, is_equivalent, is_equivalent_json, parse_number,
};

#[cfg(feature = "cli")]
pub use crate::logging::init_logging;
