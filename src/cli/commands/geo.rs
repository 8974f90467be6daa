use crate::cli::parser::{Commands, GeoAction};
use crate::config::Config;
use crate::core::geo::{CoordinateLiteralGeocoder, LocationResolver};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{list_locations, set_location};
use crate::errors::AppResult;
use crate::models::GeoPoint;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Geo { action } = cmd {
        let pool = DbPool::open_migrated(&cfg.database)?;

        match action {
            GeoAction::Set {
                location,
                lat,
                long,
            } => {
                let point = GeoPoint::new(*lat, *long)?;
                set_location(&pool.conn, location.trim(), point)?;
                ttlog_or_warn(&pool.conn, "geo", location.trim(), &format!("Set to {}", point));
                success(format!("'{}' → {}", location.trim(), point));
            }
            GeoAction::Get { location } => {
                let resolver = LocationResolver::new(&pool.conn, CoordinateLiteralGeocoder);
                let point = resolver.resolve_one(location.trim())?;
                println!("{} → {}", location.trim(), point);
            }
            GeoAction::List => {
                let entries = list_locations(&pool.conn)?;
                if entries.is_empty() {
                    println!("Location cache is empty.");
                    return Ok(());
                }
                let mut table = Table::new(vec![Column::new("LOCATION", 40), Column::new("COORDS", 22)]);
                for (location, point) in entries {
                    table.add_row(vec![location, point.to_string()]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
