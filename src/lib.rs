pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod telemetry;
