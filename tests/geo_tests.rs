use routeslot::core::geo::{CoordinateLiteralGeocoder, Geocoder, LocationResolver};
use routeslot::db::initialize::init_db;
use routeslot::db::queries::{cached_locations, list_locations, set_location};
use routeslot::errors::{AppError, AppResult};
use routeslot::models::GeoPoint;
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Knows a fixed set of addresses and remembers what it was asked.
struct FakeGeocoder {
    known: HashMap<&'static str, GeoPoint>,
    asked: RefCell<Vec<String>>,
}

impl FakeGeocoder {
    fn new() -> Self {
        Self {
            known: HashMap::from([
                ("Harbour 1", GeoPoint { lat: 55.0, long: 12.0 }),
                ("Hill 7", GeoPoint { lat: 56.0, long: 13.0 }),
            ]),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Geocoder for &FakeGeocoder {
    fn geocode(&self, address: &str) -> AppResult<Option<GeoPoint>> {
        self.asked.borrow_mut().push(address.to_string());
        Ok(self.known.get(address).copied())
    }
}

struct FailingGeocoder;

impl Geocoder for FailingGeocoder {
    fn geocode(&self, _address: &str) -> AppResult<Option<GeoPoint>> {
        Err(AppError::Other("geocoding service unavailable".into()))
    }
}

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open db");
    init_db(&conn).expect("init db");
    conn
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_misses_are_geocoded_and_written_back() {
    let conn = memory_db();
    let geo = FakeGeocoder::new();
    let resolver = LocationResolver::new(&conn, &geo);

    let found = resolver
        .resolve_locations(&set(&["Harbour 1", "Hill 7", "Nowhere"]))
        .expect("resolve");

    assert_eq!(found.len(), 2);
    assert_eq!(found["Hill 7"], GeoPoint { lat: 56.0, long: 13.0 });
    assert!(!found.contains_key("Nowhere"));
    assert_eq!(*geo.asked.borrow(), vec!["Harbour 1", "Hill 7", "Nowhere"]);

    let cached = list_locations(&conn).expect("list");
    assert_eq!(cached.len(), 2);
}

#[test]
fn test_cache_hits_skip_the_geocoder() {
    let conn = memory_db();
    let geo = FakeGeocoder::new();
    let resolver = LocationResolver::new(&conn, &geo);

    resolver
        .resolve_locations(&set(&["Harbour 1"]))
        .expect("first");
    geo.asked.borrow_mut().clear();

    let found = resolver
        .resolve_locations(&set(&["Harbour 1"]))
        .expect("second");

    assert_eq!(found.len(), 1);
    assert!(geo.asked.borrow().is_empty());
}

#[test]
fn test_user_entry_wins_over_geocoder() {
    let conn = memory_db();
    let mine = GeoPoint { lat: 10.0, long: 20.0 };
    set_location(&conn, "Harbour 1", mine).expect("set");

    let geo = FakeGeocoder::new();
    let found = LocationResolver::new(&conn, &geo)
        .resolve_locations(&set(&["Harbour 1"]))
        .expect("resolve");

    assert_eq!(found["Harbour 1"], mine);
}

#[test]
fn test_set_location_overwrites() {
    let conn = memory_db();
    set_location(&conn, "Office", GeoPoint { lat: 1.0, long: 1.0 }).expect("set");
    set_location(&conn, "Office", GeoPoint { lat: 2.0, long: 3.0 }).expect("set again");

    let found = cached_locations(&conn, &["Office".to_string()]).expect("load");
    assert_eq!(found["Office"], GeoPoint { lat: 2.0, long: 3.0 });
}

#[test]
fn test_empty_strings_are_ignored() {
    let conn = memory_db();
    let geo = FakeGeocoder::new();

    let found = LocationResolver::new(&conn, &geo)
        .resolve_locations(&set(&["", "   "]))
        .expect("resolve");

    assert!(found.is_empty());
    assert!(geo.asked.borrow().is_empty());
}

#[test]
fn test_geocoder_errors_propagate() {
    let conn = memory_db();
    let result = LocationResolver::new(&conn, FailingGeocoder).resolve_locations(&set(&["x"]));
    assert!(matches!(result, Err(AppError::Other(_))));
}

#[test]
fn test_resolve_one_reports_unknown_address() {
    let conn = memory_db();
    let err = LocationResolver::new(&conn, CoordinateLiteralGeocoder)
        .resolve_one("Atlantis")
        .unwrap_err();
    assert!(matches!(err, AppError::UnresolvedLocation(_)));
}

#[test]
fn test_coordinate_literals() {
    assert_eq!(
        CoordinateLiteralGeocoder::parse("55.5, 12.25"),
        Some(GeoPoint { lat: 55.5, long: 12.25 })
    );
    assert_eq!(
        CoordinateLiteralGeocoder::parse("-33.9;151.2"),
        Some(GeoPoint { lat: -33.9, long: 151.2 })
    );
    assert_eq!(CoordinateLiteralGeocoder::parse("95,10"), None);
    assert_eq!(CoordinateLiteralGeocoder::parse("Main Street 5"), None);
}
