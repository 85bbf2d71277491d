//! Display Utility Modules
//!
//! Formatting, validation and link helpers for the dashboard front end.

pub mod formatting;
pub mod links;
pub mod percent;
pub mod time;
pub mod validation;

pub use formatting::*;
pub use links::*;
pub use percent::*;
pub use time::*;
pub use validation::*;
