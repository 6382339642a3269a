use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::cli::views::{NO_APPLICATIONS, render_records};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Followups { as_of } = cmd {
        let as_of = date::resolve_as_of(as_of.as_deref()).map_err(AppError::InvalidDate)?;
        let store = open_store(cfg)?;

        if store.count()? == 0 {
            info(NO_APPLICATIONS);
            return Ok(());
        }

        let pending = store.pending_follow_ups(as_of)?;
        if pending.is_empty() {
            info(format!("No follow-ups pending as of {}.", date::format_date(&as_of)));
            return Ok(());
        }

        print!("{}", render_records("Follow-ups Pending", &pending, as_of));
    }
    Ok(())
}
