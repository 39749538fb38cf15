use clap::Parser;
use modkoll_core::metadata::MODALIAS_SCRIPT;

/// Takes no arguments: the device tree at `/sys` is always scanned, and one
/// modalias per line is printed, sorted and without duplicates.
#[derive(Debug, Parser)]
#[command(
    version,
    about = MODALIAS_SCRIPT.title,
    long_about = MODALIAS_SCRIPT.description,
    after_long_help = MODALIAS_SCRIPT.to_string()
)]
pub struct Cli {}
