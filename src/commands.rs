//! Command handlers

use chrono::Local;

use crate::app::MaintenanceService;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::model::{Vehicle, VehicleStatus};
use crate::domain::service::AlertFilter;
use crate::error::{Error, Result};
use crate::export::export_due_records;
use crate::infrastructure::fleet_csv;
use crate::output::{output_catalog, output_due_records, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    let format = config.output_format;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Fleet { status } => {
            let service = MaintenanceService::open(&config)?;
            let mut vehicles = service.vehicles();
            if let Some(status) = status {
                let status = status
                    .parse::<VehicleStatus>()
                    .map_err(Error::FleetImport)?;
                vehicles.retain(|v| v.status == status);
            }
            output_vehicles(format, &vehicles)?;
        }

        Commands::AddVehicle {
            id,
            equipment,
            registration,
            commissioned,
            kmr,
            hmr,
            tier,
        } => {
            let service = MaintenanceService::open(&config)?;
            let mut vehicle = Vehicle::new(id, equipment);
            vehicle.registration = registration;
            vehicle.commissioning_date = commissioned;
            vehicle.kmr = kmr;
            vehicle.hmr = hmr;
            vehicle.tier = tier;
            let id = service.add_vehicle(vehicle)?;
            println!("Registered vehicle {}", id);
        }

        Commands::ImportFleet { csv } => {
            let service = MaintenanceService::open(&config)?;
            let fleet = fleet_csv::load_fleet_from_file(&csv)?;
            let count = fleet.len();
            for vehicle in fleet {
                service.add_vehicle(vehicle)?;
            }
            println!("Imported {} vehicles ({} on roster)", count, service.vehicle_count());
        }

        Commands::Usage { vehicle, km, hours } => {
            let service = MaintenanceService::open(&config)?;
            service.record_usage(&vehicle, km, hours)?;
            println!("Recorded usage for {}: +{:.1} km, +{:.1} h", vehicle, km, hours);
        }

        Commands::Service {
            vehicle,
            service_type,
            date,
            km,
            hmr,
        } => {
            let service = MaintenanceService::open(&config)?;
            let date = date.unwrap_or(today);
            service.record_service(&vehicle, &service_type, date, km, hmr)?;
            println!("Recorded {} for {} on {}", service_type, vehicle, date);
        }

        Commands::Due { vehicle } => {
            let service = MaintenanceService::open(&config)?;
            let records = service.due_records(vehicle.as_deref(), today)?;
            output_due_records(format, &records)?;
        }

        Commands::Alerts {
            overdue_only,
            vehicle,
            service: service_type,
        } => {
            let service = MaintenanceService::open(&config)?;
            let filter = AlertFilter {
                overdue_only,
                vehicle_id: vehicle,
                service_type,
            };
            let records = service.alerts(&filter, today)?;
            output_due_records(format, &records)?;
        }

        Commands::Export {
            output,
            overdue_only,
        } => {
            let service = MaintenanceService::open(&config)?;
            let filter = AlertFilter {
                overdue_only,
                ..Default::default()
            };
            let records = service.alerts(&filter, today)?;
            export_due_records(&output, &records)?;
            println!("Exported {} due records to {}", records.len(), output.display());
        }

        Commands::Catalog => {
            let service = MaintenanceService::open(&config)?;
            output_catalog(format, &service.catalog().all(), &service.tiers().all())?;
        }

        Commands::Config {
            show,
            set_store_dir,
            set_catalog,
            set_tiers,
            set_output,
            reset,
        } => {
            if reset {
                config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
            }

            let mut changed = false;
            if let Some(dir) = set_store_dir {
                config.store_dir = Some(dir);
                changed = true;
            }
            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
                changed = true;
            }
            if let Some(path) = set_tiers {
                config.tiers_path = Some(path);
                changed = true;
            }
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("Configuration saved");
            }

            if show || (!changed && !reset) {
                println!("{}", config);
            }
        }
    }

    Ok(())
}
