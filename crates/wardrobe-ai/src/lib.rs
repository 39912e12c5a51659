//! Outfit recommendation workflows for a personal wardrobe service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
