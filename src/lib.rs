//! NutriTrack Library
//!
//! Groups nutrition logs by day and computes the dashboard reports.

pub mod build_info;
pub mod config;
pub mod dataset;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
