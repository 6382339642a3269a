use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let lines = LogLogic::render_log(&cfg.audit_log_path())?;

        if lines.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        println!("📜 Audit log:\n");
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
