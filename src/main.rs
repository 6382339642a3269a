//! jobtracker main entrypoint.

use jobtracker::run;
use jobtracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
