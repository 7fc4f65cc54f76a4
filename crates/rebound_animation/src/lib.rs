//! Rebound Animation System
//!
//! Timed single-value interpolation for widget recovery effects.
//!
//! # Features
//!
//! - **Easing**: linear/quad/cubic easing family
//! - **Recovery animation**: fixed-duration return-to-rest interpolation
//! - **Interruptible**: animations pause on renewed touch and resume or
//!   re-arm from their interrupted value without snapping

pub mod easing;
pub mod recovery;

pub use easing::Easing;
pub use recovery::{Playback, RecoveryAnimation, DEFAULT_RECOVERY_DURATION_MS};
