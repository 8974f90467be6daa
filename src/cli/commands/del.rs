use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_event;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open_migrated(&cfg.database)?;

        let event = load_event(&pool.conn, *id)?.ok_or(AppError::EventNotFound(*id))?;

        if !*yes {
            let prompt = format!(
                "Delete event #{} '{}' on {}? This action is irreversible.",
                event.id,
                event.title,
                event.start_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Event #{} '{}' has been deleted.", deleted.id, deleted.title));
    }

    Ok(())
}

