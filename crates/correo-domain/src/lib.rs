//! Domain layer for the correo demo services

pub mod model;
pub mod service;
