//! Home Feature - Profile Form

pub mod controller;
pub mod page;
