//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{format_guess_row, print_check_result, print_statistics, write_statistics};
