//! Output formatting module

use crate::cli::OutputFormat;
use crate::domain::model::{ServiceType, Tier, Vehicle};
use crate::error::Result;
use crate::types::DueRecord;

/// Render due records as a table or JSON
pub fn output_due_records(output_format: OutputFormat, records: &[DueRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No due records.");
        return Ok(());
    }

    println!(
        "{:<8} {:<22} {:<12} {:<6} {:>10} {:>10} {:>10} {:<10} {:<12}",
        "Vehicle", "Service", "Kind", "Dim", "Next Due", "Current", "Remaining", "Urgency", "Predicted"
    );
    println!("{}", "-".repeat(108));

    for record in records {
        println!(
            "{:<8} {:<22} {:<12} {:<6} {:>10.1} {:>10} {:>10} {:<10} {:<12}",
            record.vehicle_id,
            record.service_type,
            record.kind.label(),
            record.dimension.label(),
            record.next_due,
            fmt_opt(record.current),
            fmt_opt(record.remaining),
            record.urgency.label(),
            record
                .predicted_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    Ok(())
}

/// Render the fleet roster
pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles on the roster.");
        return Ok(());
    }

    println!(
        "{:<8} {:<14} {:<12} {:<13} {:>10} {:>10} {:<8} {:<12}",
        "Asset", "Equipment", "Reg No", "Commissioned", "KMR", "HMR", "Tier", "Status"
    );
    println!("{}", "-".repeat(95));

    for vehicle in vehicles {
        println!(
            "{:<8} {:<14} {:<12} {:<13} {:>10} {:>10} {:<8} {:<12}",
            vehicle.id,
            vehicle.equipment,
            vehicle.registration.as_deref().unwrap_or("-"),
            vehicle
                .commissioning_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            fmt_opt(vehicle.kmr),
            fmt_opt(vehicle.hmr),
            vehicle.tier.as_deref().unwrap_or("-"),
            vehicle.status.label(),
        );
    }

    Ok(())
}

/// Render the interval and tier catalogs
pub fn output_catalog(
    output_format: OutputFormat,
    service_types: &[&ServiceType],
    tiers: &[&Tier],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "service_types": service_types,
            "tiers": tiers,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Service Intervals");
    println!("=================");
    println!(
        "{:<24} {:>10} {:>10} {:>8}",
        "Service Type", "km", "hours", "days"
    );
    for service_type in service_types {
        println!(
            "{:<24} {:>10} {:>10} {:>8}",
            service_type.name,
            fmt_opt(service_type.intervals.km),
            fmt_opt(service_type.intervals.hours),
            fmt_opt(service_type.intervals.days),
        );
    }

    println!();
    println!("Condition Tiers");
    println!("===============");
    for tier in tiers {
        println!("{}: {}", tier.id, tier.description);
        println!(
            "  service interval: {} km / {} h   replacement: {} km / {} h",
            fmt_opt(tier.service_interval_km),
            fmt_opt(tier.service_interval_hours),
            fmt_opt(tier.replacement_threshold_km),
            fmt_opt(tier.replacement_threshold_hours),
        );
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
