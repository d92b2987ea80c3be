//! Binary entry point for `template-helper`.

use std::process;

fn main() {
    if let Err(e) = template_helper::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
