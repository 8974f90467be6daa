use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let calendars: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT calendar) FROM events",
        [],
        |row| row.get(0),
    )?;
    let cached: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM location_cache", [], |row| row.get(0))?;
    let unlocated: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events e
         WHERE e.location IS NULL
            OR NOT EXISTS (SELECT 1 FROM location_cache c WHERE c.location = e.location)",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!("{}• Calendars:{} {}", CYAN, RESET, calendars);
    println!("{}• Cached locations:{} {}", CYAN, RESET, cached);
    println!("{}• Events without coordinates:{} {}", CYAN, RESET, unlocated);

    //
    // 3) TIME SPAN
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start_at) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(end_at) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    println!("{}• Time span:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
