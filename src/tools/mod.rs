//! NutriTrack Tools module
//!
//! MCP tool implementations for the nutrition dashboard.

pub mod dashboard;
pub mod status;
