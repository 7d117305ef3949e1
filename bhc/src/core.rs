// src/core.rs
pub mod health;
pub mod report;
