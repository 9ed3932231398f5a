//! Domain layer: model types and maintenance services

pub mod model;
pub mod service;
