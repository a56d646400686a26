//! Service Layer
//!
//! Everything the UI reaches for outside its own entities: the tokio bridge,
//! the form submitter and the hub that ties them to the event pump.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ServiceHub                    │
//! │  ┌──────────────┐    ┌─────────────────────┐ │
//! │  │ FormSubmitter│    │ AppEvent sender     │ │
//! │  │ (via tokio)  │    │ (log panel)         │ │
//! │  └──────────────┘    └─────────────────────┘ │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼ AppEvent
//! ┌──────────────────────────────────────────────┐
//! │                 State Layer                   │
//! │            (LogState, form state)             │
//! └──────────────────────────────────────────────┘
//! ```

mod hub;
mod runtime;
mod submitter;

pub use hub::*;
pub use runtime::*;
pub use submitter::*;
