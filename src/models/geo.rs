use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A resolved geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub long: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, long: f64) -> AppResult<Self> {
        let point = Self { lat, long };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.lat.is_finite() || !self.long.is_finite() {
            return Err(AppError::InvalidCoordinates(format!(
                "({}, {}) is not a finite position",
                self.lat, self.long
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.long) {
            return Err(AppError::InvalidCoordinates(format!(
                "({}, {}) is outside lat [-90, 90] / long [-180, 180]",
                self.lat, self.long
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.long)
    }
}
