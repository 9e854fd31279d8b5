//! CLI functionality for the tempcast tool
//!
//! One module per subcommand, plus output formatting.

pub mod cast;
pub mod compare;
pub mod load;
pub mod now;
pub mod output;

use clap::ValueEnum;

/// Value type a subcommand operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Date,
    Time,
    #[value(name = "datetime")]
    DateTime,
}
