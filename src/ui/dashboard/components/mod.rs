//! Dashboard UI components
//!
//! Modular components for the dashboard screen

pub mod achievements;
pub mod footer;
pub mod header;
pub mod logs;
pub mod progress;
pub mod subscription;
pub mod wallet;
