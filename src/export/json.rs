use super::model::EventExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write events as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, events: &[EventExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)?;
    std::fs::write(path, json)?;
    Ok(())
}
