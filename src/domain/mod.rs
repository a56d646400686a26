//! Domain - Pure Data Structures and Form Rules
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod form;
pub mod hobbies;
pub mod submission;
pub mod validation;
