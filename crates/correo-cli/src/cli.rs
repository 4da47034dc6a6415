//! CLI argument definitions

use clap::{Parser, Subcommand};
use correo_types::OutputFormat;

#[derive(Parser)]
#[command(name = "correo")]
#[command(version)]
#[command(about = "Shipment tracking and shipping quotes for the Correo demo site")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Show verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track a shipment by its tracking code
    Track {
        /// Tracking code (13 uppercase letters and digits)
        code: String,

        /// Skip the simulated lookup delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Calculate a shipping quote
    Quote {
        /// Origin city
        #[arg(long)]
        origin: Option<String>,

        /// Destination city
        #[arg(long)]
        destination: Option<String>,

        /// Package weight in kilograms
        #[arg(long)]
        weight_kg: Option<String>,

        /// Service tier: estandar, express or prioritario
        #[arg(long)]
        tier: Option<String>,

        /// Add shipping insurance
        #[arg(long)]
        insured: bool,
    },

    /// Show or update accessibility preferences
    Config {
        /// Print the current preferences
        #[arg(long)]
        show: bool,

        /// Enable or disable high contrast mode
        #[arg(long)]
        set_high_contrast: Option<bool>,

        /// Enable or disable large text mode
        #[arg(long)]
        set_large_text: Option<bool>,

        /// Restore default preferences
        #[arg(long)]
        reset: bool,
    },
}
