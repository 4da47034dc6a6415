//! Command execution logic

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use correo_app::app::resolve_tracking;
use correo_app::config::Config;
use correo_domain::service::{calculate, validate_form};
use correo_types::{OutputFormat, Result, ShippingForm, TrackingCode, ValidationError};

use crate::cli::{Cli, Commands};
use crate::output;

/// Matches the simulated network delay of the demo site.
const LOOKUP_DELAY_MS: u64 = 1500;

pub fn execute(cli: Cli) -> Result<()> {
    let output_format = cli.format.unwrap_or_default();

    match &cli.command {
        Commands::Track { code, no_delay } => {
            cmd_track(code, *no_delay, output_format, cli.verbose)
        }
        Commands::Quote {
            origin,
            destination,
            weight_kg,
            tier,
            insured,
        } => {
            let form = ShippingForm {
                origin: origin.clone().unwrap_or_default(),
                destination: destination.clone().unwrap_or_default(),
                weight: weight_kg.clone().unwrap_or_default(),
                service_tier: tier.clone().unwrap_or_default(),
                insured: *insured,
            };
            cmd_quote(&form, output_format)
        }
        Commands::Config {
            show,
            set_high_contrast,
            set_large_text,
            reset,
        } => cmd_config(*show, *set_high_contrast, *set_large_text, *reset),
    }
}

fn cmd_track(raw_code: &str, no_delay: bool, format: OutputFormat, verbose: bool) -> Result<()> {
    let code = match TrackingCode::parse(raw_code) {
        Ok(code) => code,
        // An empty code counts as an untouched field; the site shows no message.
        Err(ValidationError::Empty) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if verbose {
        eprintln!("Looking up tracking code {}", code);
    }

    if !no_delay {
        simulate_lookup_delay();
    }

    let outcome = resolve_tracking(&code);
    output::output_tracking(format, &outcome)
}

/// Spinner standing in for the demo site's fake network wait.
fn simulate_lookup_delay() {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message("Rastreando...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    std::thread::sleep(Duration::from_millis(LOOKUP_DELAY_MS));
    spinner.finish_and_clear();
}

fn cmd_quote(form: &ShippingForm, format: OutputFormat) -> Result<()> {
    let request = match validate_form(form) {
        Ok(request) => request,
        Err(errors) => {
            for error in &errors {
                match error.field() {
                    Some(field) => eprintln!("{}: {}", field, error),
                    None => eprintln!("{}", error),
                }
            }
            std::process::exit(1);
        }
    };

    let quote = calculate(&request);
    output::output_quote(format, &quote)
}

fn cmd_config(
    show: bool,
    set_high_contrast: Option<bool>,
    set_large_text: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Preferencias restablecidas");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(enabled) = set_high_contrast {
        config.high_contrast = enabled;
        println!("{}", Config::high_contrast_announcement(enabled));
        modified = true;
    }

    if let Some(enabled) = set_large_text {
        config.large_text = enabled;
        println!("{}", Config::large_text_announcement(enabled));
        modified = true;
    }

    if modified {
        config.save()?;
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
