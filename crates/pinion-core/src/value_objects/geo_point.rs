//! Geographic coordinate attached to a pin

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a coordinate, rejecting values outside the valid degree ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Check that both components are finite and within range
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude {} out of range",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude {} out of range",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Six decimal places, the precision shown under the map picker
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
