//! Display-density unit conversion
//!
//! Widgets size themselves in device-independent pixels (dip); the host
//! platform supplies the density scale factor that maps them to physical
//! pixels.

use thiserror::Error;

/// Unit conversion errors
#[derive(Error, Debug)]
pub enum UnitError {
    /// Density scale factor must be finite and positive
    #[error("invalid display density: {0} (must be finite and positive)")]
    InvalidDensity(f32),
}

/// Display density: physical pixels per device-independent pixel.
///
/// 1.0 is the baseline (mdpi) density; a typical phone screen is 2.0-3.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
    /// Create a density with a validated scale factor
    pub fn new(factor: f32) -> Result<Self, UnitError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(UnitError::InvalidDensity(factor));
        }
        Ok(Self(factor))
    }

    /// The raw scale factor
    pub fn factor(&self) -> f32 {
        self.0
    }

    /// Convert device-independent pixels to physical pixels
    pub fn dip_to_px(&self, dip: f32) -> f32 {
        dip * self.0
    }

    /// Convert to a physical pixel count, truncating the fraction
    pub fn dip_to_px_i32(&self, dip: f32) -> i32 {
        (dip * self.0) as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
