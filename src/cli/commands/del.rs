use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut store = open_store(cfg)?;

        // fails with IndexOutOfRange before anything is asked
        let target = store.get(*index)?;
        let label = target.record.label();

        //
        // Confirmation prompt
        //
        if !*yes {
            warning(format!(
                "Delete application #{} '{}'? This action is irreversible.",
                index, label
            ));
            if !confirm("Confirm") {
                info("Deletion cancelled.");
                return Ok(());
            }
        }

        let removed = store.delete(*index)?;

        audit(cfg, "del", &removed.label(), &format!("Deleted application #{}", index));
        success(format!("Application #{} '{}' deleted.", index, removed.label()));
    }

    Ok(())
}
