use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ApplicationStore;
use crate::errors::AppResult;
use crate::table::TableBackend;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the applications table with its column header
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.table.as_deref(), cli.test)?;

    println!("⚙️  Initializing jobtracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let store = ApplicationStore::open(cfg.table_path())?;
    let location = store.backend().describe();
    println!("🗂️  Table       : {}", location);

    audit(&cfg, "init", &location, "Applications table initialized");

    println!("🎉 jobtracker initialization completed!");
    Ok(())
}
