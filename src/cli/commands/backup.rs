use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file);
        let target = BackupLogic::target_path(&dest, *compress);

        if target.exists() && !*force {
            warning(format!("The file '{}' already exists.", target.display()));
            if !confirm("Do you want to overwrite it?") {
                info("Backup cancelled.");
                return Ok(());
            }
        }

        let final_path = BackupLogic::backup(&cfg.table_path(), &dest, *compress)?;

        audit(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
        success(format!("Backup created: {}", final_path.display()));
    }

    Ok(())
}
