pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod registry;
pub mod routes;
pub mod storage;
pub mod telemetry;
pub mod validation;
