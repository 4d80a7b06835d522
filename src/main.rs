use std::process::exit;

use addrbook::prelude::run_app;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
