//! Hobby Form Library
//!
//! A desktop profile form: username, email, password and a dynamic list of
//! hobbies, validated on every edit and submitted through a simulated backend.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
