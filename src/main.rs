//! rInternLog main entrypoint.

use rinternlog::run;
use rinternlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
