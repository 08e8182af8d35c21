//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod chart;
pub mod footer;
pub mod header;
pub mod input_bar;
pub mod logs;
pub mod predictions;
pub mod stats;
pub mod toast;
