//! Eventing - Messages from Services to the UI

pub mod app_event;
