//! Great-circle distances and quantized travel buffers.

use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_SPEED_KMH: f64 = 50.0;
pub const DEFAULT_ROUNDING_MINUTES: i64 = 30;

/// Haversine distance in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_long = (b.long - a.long).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_long / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance rounded to the nearest whole kilometer.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u32 {
    haversine_km(a, b).round() as u32
}

/// Converts distances into travel time at a fixed speed, rounded up to a
/// fixed step so buffers are never underestimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    pub speed_kmh: f64,
    pub rounding_minutes: i64,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            rounding_minutes: DEFAULT_ROUNDING_MINUTES,
        }
    }
}

impl TravelModel {
    pub fn new(speed_kmh: f64, rounding_minutes: i64) -> AppResult<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(AppError::Config(format!(
                "average speed must be positive, got {speed_kmh}"
            )));
        }
        if rounding_minutes <= 0 {
            return Err(AppError::Config(format!(
                "travel rounding must be positive, got {rounding_minutes}"
            )));
        }
        Ok(Self {
            speed_kmh,
            rounding_minutes,
        })
    }

    /// Unquantized minutes needed to cover `km`.
    pub fn raw_minutes(&self, km: u32) -> f64 {
        f64::from(km) / self.speed_kmh * 60.0
    }

    /// Travel minutes rounded up to the next multiple of `rounding_minutes`.
    pub fn buffer_minutes(&self, km: u32) -> i64 {
        let steps = (self.raw_minutes(km) / self.rounding_minutes as f64).ceil() as i64;
        steps * self.rounding_minutes
    }

    /// Distance and buffer between two optional points; a missing side costs nothing.
    pub fn leg(&self, from: Option<GeoPoint>, to: Option<GeoPoint>) -> Leg {
        match (from, to) {
            (Some(a), Some(b)) => {
                let km = distance_km(a, b);
                Leg {
                    km,
                    minutes: self.buffer_minutes(km),
                }
            }
            _ => Leg::default(),
        }
    }
}

/// One direction of travel around the new appointment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leg {
    pub km: u32,
    pub minutes: i64,
}
