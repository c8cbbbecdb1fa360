//! stride-brand - command-line front-end for the Stride branding engine
//!
//! Renders a partner identity to style variables, and exposes the colour
//! helpers for checking partner palettes by hand.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stride-brand")]
#[command(about = "Render and inspect white-label branding")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply an identity and print the projected style variables
    Render {
        /// User, partner, login-response or bare visual_identity JSON file
        #[arg(short, long)]
        identity: Option<PathBuf>,

        /// Colour mode to resolve
        #[arg(short, long, value_enum, default_value_t = Mode::System)]
        mode: Mode,

        /// Branding configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },

    /// Normalize a hex or "r,g,b" colour
    Normalize {
        value: String,

        /// Returned when the value is not a readable colour
        #[arg(long, default_value = "#000000")]
        fallback: String,
    },

    /// WCAG contrast ratio between two colours
    Contrast { first: String, second: String },

    /// Derived shade, tint and RGB triple of a colour
    Derive {
        hex: String,

        #[arg(long, default_value_t = stride_core::DEFAULT_SHADE_FACTOR)]
        factor: f64,
    },

    /// Report text/background pairs below WCAG AA
    Audit {
        #[arg(short, long)]
        identity: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Light,
    Dark,
    /// Detect the system preference
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Css,
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Render {
            identity,
            mode,
            config,
            format,
        } => commands::render(identity.as_deref(), mode, config.as_deref(), format, &mut out),
        Commands::Normalize { value, fallback } => {
            commands::normalize(&value, &fallback, &mut out)
        }
        Commands::Contrast { first, second } => commands::contrast(&first, &second, &mut out),
        Commands::Derive { hex, factor } => commands::derive(&hex, factor, &mut out),
        Commands::Audit { identity, config } => {
            commands::audit(&identity, config.as_deref(), &mut out)
        }
    }
}
