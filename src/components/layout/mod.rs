//! Layout Components
//!
//! Header and log panel around the page content.

pub mod header;
pub mod log_panel;
