use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::cli::views::{NO_APPLICATIONS, render_stats};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { as_of } = cmd {
        let as_of = date::resolve_as_of(as_of.as_deref()).map_err(AppError::InvalidDate)?;
        let store = open_store(cfg)?;

        match store.stats(as_of) {
            Ok(report) => print!("{}", render_stats(&report)),
            Err(AppError::EmptyStore) => info(NO_APPLICATIONS),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
