use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::cli::views::{NO_APPLICATIONS, render_records};
use crate::config::Config;
use crate::core::ApplicationFilter;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { company, status } = cmd {
        let store = open_store(cfg)?;
        let filter = ApplicationFilter::new(company.as_deref(), status.as_deref());

        let all = store.list_all()?;
        if all.is_empty() {
            info(NO_APPLICATIONS);
            return Ok(());
        }

        let records = if filter.is_empty() {
            all
        } else {
            store.filter(&filter)?
        };

        if records.is_empty() {
            info("No applications match the given filters.");
            return Ok(());
        }

        let title = if filter.is_empty() {
            "All Job Applications"
        } else {
            "Filtered Job Applications"
        };
        print!("{}", render_records(title, &records, date::today()));
        println!("\nShown: {} of {}", records.len(), store.count()?);
    }
    Ok(())
}
