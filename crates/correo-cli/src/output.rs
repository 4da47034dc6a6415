//! Output formatting for tracking results and quotes

use correo_app::app::{TrackingOutcome, TrackingReport};
use correo_domain::service::{format_currency, quote_announcement};
use correo_types::{OutputFormat, Result, ShippingQuote};

pub fn output_tracking(format: OutputFormat, outcome: &TrackingOutcome) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Table => {
            match outcome {
                TrackingOutcome::Found(report) => print_tracking_report(report),
                TrackingOutcome::NotFound { code } => {
                    println!("No se encontró el envío");
                    println!(
                        "El número de tracking {} no existe o aún no está en el sistema.",
                        code
                    );
                }
            }
            println!();
            println!("{}", outcome.announcement());
        }
    }
    Ok(())
}

fn print_tracking_report(report: &TrackingReport) {
    println!("Seguimiento de Envío");
    println!("====================");
    println!();
    println!("Código: {}", report.code);
    println!();

    for item in &report.timeline {
        let marker = if item.active { "●" } else { "✓" };
        println!(
            "  {} {:<30} {:<15} {}",
            marker, item.event.status, item.event.date, item.event.location
        );
    }

    println!();
    println!("Estado actual:    {}", report.current_status);
    println!("Entrega estimada: {}", report.estimated_delivery);
}

pub fn output_quote(format: OutputFormat, quote: &ShippingQuote) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(quote)?);
        }
        OutputFormat::Table => {
            print_quote_panel(quote);
            println!();
            println!("{}", quote_announcement(quote));
        }
    }
    Ok(())
}

fn print_quote_panel(quote: &ShippingQuote) {
    let request = &quote.request;

    println!("Costo de Envío");
    println!("==============");
    println!();
    println!(
        "Origen - Destino:  {} → {}",
        request.origin, request.destination
    );
    println!("Peso:              {} kg", request.weight_kg);
    println!("Tipo de envío:     {}", request.tier.label());
    println!("Costo base:        ${}", format_currency(quote.base_cost));

    if request.insured {
        println!(
            "Seguro de envío:   ${}",
            format_currency(quote.insurance_cost)
        );
    }

    println!("Total:             ${}", format_currency(quote.total_cost));
}
