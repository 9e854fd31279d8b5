//! Now command implementation

use super::Target;
use super::output::{self, OutputFormat};
use anyhow::Result;
use tempcast_types::{Date, DateTime, Temporal, Time};

/// Configuration for now command
pub struct NowConfig {
    pub target: Target,
    /// Read the host's local clock instead of UTC
    pub local: bool,
    /// Keep microseconds; otherwise the value is truncated to the second
    pub usec: bool,
    pub format: OutputFormat,
}

/// Read the clock and render the current value
#[allow(deprecated)]
pub fn now(config: &NowConfig) -> Result<String> {
    match config.target {
        Target::Date => {
            let today = if config.local { Date::local() } else { Date::utc() };
            output::render(&today, config.format)
        }
        Target::Time => {
            let time = if config.local { Time::local() } else { Time::utc() };
            let time = if config.usec {
                time
            } else {
                Time::from_erl(time.to_erl())?
            };
            output::render(&time, config.format)
        }
        Target::DateTime => {
            let datetime = if config.local {
                let local = DateTime::local();
                if config.usec {
                    local
                } else {
                    DateTime::from_erl(local.to_erl())?
                }
            } else if config.usec {
                DateTime::load(DateTime::autogenerate_usec())?
            } else {
                DateTime::load(DateTime::autogenerate())?
            };
            output::render(&datetime, config.format)
        }
    }
}
