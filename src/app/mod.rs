//! Application service layer

pub mod maintenance_service;

pub use maintenance_service::MaintenanceService;
