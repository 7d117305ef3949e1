// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, run};
pub use error::ReportError;
pub use self::core::health::compute_health;
pub use self::core::report::load_report;
pub use models::{HealthReading, HealthTier};
