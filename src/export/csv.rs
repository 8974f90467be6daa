use super::model::EventExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write events as CSV (header row from the field names).
pub(crate) fn write_csv(path: &Path, events: &[EventExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for ev in events {
        wtr.serialize(ev)?;
    }
    wtr.flush()?;
    Ok(())
}
