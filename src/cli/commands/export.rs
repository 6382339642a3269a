use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let records = store.list_all()?;
        let path = expand_tilde(file);

        if ExportLogic::export(&records, *format, &path, *force)? {
            audit(
                cfg,
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} application(s) as {}", records.len(), format.as_str()),
            );
        }
    }
    Ok(())
}
