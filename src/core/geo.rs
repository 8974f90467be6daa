//! Location resolution: address string → coordinates.
//!
//! Lookups go to the persistent `location_cache` first (exact string match),
//! then to a [`Geocoder`]. Whatever the geocoder finds is written back and
//! never invalidated.

use crate::db::queries::{cache_location, cached_locations};
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use regex::Regex;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Fallback used for addresses missing from the cache.
pub trait Geocoder {
    /// `Ok(None)` when the address is unknown.
    fn geocode(&self, address: &str) -> AppResult<Option<GeoPoint>>;
}

static COORDINATE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?\d{1,3}(?:\.\d+)?)\s*[,;]\s*([-+]?\d{1,3}(?:\.\d+)?)\s*$")
        .expect("coordinate pattern is valid")
});

/// Accepts addresses written as `"lat,long"` (or `"lat;long"`).
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateLiteralGeocoder;

impl CoordinateLiteralGeocoder {
    pub fn parse(address: &str) -> Option<GeoPoint> {
        let caps = COORDINATE_LITERAL.captures(address)?;
        let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
        let long: f64 = caps.get(2)?.as_str().parse().ok()?;
        GeoPoint::new(lat, long).ok()
    }
}

impl Geocoder for CoordinateLiteralGeocoder {
    fn geocode(&self, address: &str) -> AppResult<Option<GeoPoint>> {
        Ok(Self::parse(address))
    }
}

pub struct LocationResolver<'a, G: Geocoder> {
    conn: &'a Connection,
    geocoder: G,
}

impl<'a, G: Geocoder> LocationResolver<'a, G> {
    pub fn new(conn: &'a Connection, geocoder: G) -> Self {
        Self { conn, geocoder }
    }

    /// Resolve every string it can. Unresolvable ones are absent from the map.
    pub fn resolve_locations(
        &self,
        locations: &HashSet<String>,
    ) -> AppResult<HashMap<String, GeoPoint>> {
        let wanted: Vec<String> = locations
            .iter()
            .filter(|l| !l.trim().is_empty())
            .cloned()
            .collect();

        let mut found = cached_locations(self.conn, &wanted)?;

        let mut missing: Vec<&String> = wanted.iter().filter(|l| !found.contains_key(*l)).collect();
        missing.sort();

        for loc in missing {
            if let Some(point) = self.geocoder.geocode(loc)? {
                cache_location(self.conn, loc, point)?;
                found.insert(loc.clone(), point);
            }
        }

        Ok(found)
    }

    /// Resolve a single address or fail with [`AppError::UnresolvedLocation`].
    pub fn resolve_one(&self, location: &str) -> AppResult<GeoPoint> {
        let set = HashSet::from([location.to_string()]);
        self.resolve_locations(&set)?
            .remove(location)
            .ok_or_else(|| AppError::UnresolvedLocation(location.to_string()))
    }
}
