//! tempcast command-line interface

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tempcast::cli::output::{self, OutputFormat};
use tempcast::cli::{Target, cast, compare, load, now};

/// tempcast command-line tool
#[derive(Parser)]
#[command(name = "tempcast")]
#[command(author, version, about = "Cast, load and compare calendar values", long_about = None)]
struct Cli {
    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::String, global = true)]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast an input to a value
    Cast {
        /// Value type to cast to
        #[arg(value_enum)]
        target: Target,

        /// Input string, or a JSON document with --json
        input: String,

        /// Parse the input as JSON (maps and arrays become keyed maps and tuples)
        #[arg(short, long)]
        json: bool,
    },

    /// Load a value from its tuple
    Load {
        /// Value type to load
        #[arg(value_enum)]
        target: Target,

        /// Tuple as a JSON array, e.g. [[2014,4,17],[14,0,0,0]]
        tuple: String,
    },

    /// Compare two values of the same type
    Compare {
        /// Value type of both operands
        #[arg(value_enum)]
        target: Target,

        /// Left operand
        left: String,

        /// Right operand
        right: String,

        /// Parse both operands as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the current value
    Now {
        /// Value type to read
        #[arg(value_enum)]
        target: Target,

        /// Read the local clock instead of UTC
        #[arg(short, long)]
        local: bool,

        /// Keep microseconds
        #[arg(short, long)]
        usec: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Set up color output
    output::setup_colors(&cli.color);

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            target,
            input,
            json,
        } => cast::cast(&cast::CastConfig {
            target,
            input,
            json,
            format: cli.format,
        }),

        Commands::Load { target, tuple } => load::load(&load::LoadConfig {
            target,
            tuple,
            format: cli.format,
        }),

        Commands::Compare {
            target,
            left,
            right,
            json,
        } => compare::compare(&compare::CompareConfig {
            target,
            left,
            right,
            json,
        }),

        Commands::Now {
            target,
            local,
            usec,
        } => now::now(&now::NowConfig {
            target,
            local,
            usec,
            format: cli.format,
        }),
    }
    .and_then(|content| output::write_output(&content, cli.output.as_deref()));

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Install the logger; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
