// src/services/mod.rs
pub mod gemini;
pub mod metrics_manager;
pub mod parser;
pub mod planner;
