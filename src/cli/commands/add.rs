use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::NewApplication;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Add a new application.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_raw,
        company,
        role,
        method,
        contact,
        status,
        follow_up,
        notes,
    } = cmd
    {
        //
        // 1. Collect raw input (normalization happens in the store)
        //
        let input = NewApplication {
            date: date_raw.clone().unwrap_or_default(),
            company: company.clone().unwrap_or_default(),
            role: role.clone().unwrap_or_default(),
            method: method.clone().unwrap_or_default(),
            contact: contact.clone().unwrap_or_default(),
            status: status.clone().unwrap_or_else(|| cfg.default_status.clone()),
            follow_up: follow_up.clone().unwrap_or_default(),
            notes: notes.clone().unwrap_or_default(),
        };

        //
        // 2. Tell the user about substituted dates
        //
        if !input.date.trim().is_empty() && date::parse_date(&input.date).is_none() {
            warning(format!(
                "Invalid date '{}'! Using today's date.",
                input.date.trim()
            ));
        }
        if !input.follow_up.trim().is_empty() && date::parse_date(&input.follow_up).is_none() {
            warning(format!(
                "Invalid follow-up date '{}'! Leaving blank.",
                input.follow_up.trim()
            ));
        }

        //
        // 3. Append and persist
        //
        let mut store = open_store(cfg)?;
        let record = store.add(&input)?;

        audit(cfg, "add", &record.label(), &format!("Added on {}", record.date_str()));
        success(format!("Application added: {}", record.label()));
    }

    Ok(())
}
