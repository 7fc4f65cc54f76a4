//! Rebound Core
//!
//! Shared vocabulary for the Rebound widget crates:
//!
//! - **Touch events**: platform-agnostic touch phases and pointer payloads
//! - **Units**: display-density conversion between device-independent and
//!   physical pixels

pub mod events;
pub mod units;

pub use events::{EventType, TouchEvent, TouchPhase, TouchPointer};
pub use units::{Density, UnitError};
