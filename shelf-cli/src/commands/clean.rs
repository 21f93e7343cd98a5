use std::io::BufRead;

use crate::error::CliError;

/// Clean each title and print one result per line.
///
/// With no titles on the command line, titles are read from stdin.
pub(crate) fn run_clean(titles: Vec<String>) -> Result<(), CliError> {
    if titles.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            print_clean(&line?);
        }
    } else {
        for title in &titles {
            print_clean(title);
        }
    }
    Ok(())
}

fn print_clean(raw: &str) {
    let cleaned = shelf_catalog::clean(raw);
    log::debug!("{raw:?} -> {cleaned:?}");
    log::info!("{cleaned}");
}
