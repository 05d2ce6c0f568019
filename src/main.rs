//! Movies API entry point
//!
//! Parses arguments and serves via `cli::run`; on failure logs the error
//! and exits non-zero.

use movies_api::cli;
use movies_api::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        let message = e.to_string();
        log_event_with_fields(Event::BootFailed, &[("code", e.code()), ("error", &message)]);
        std::process::exit(1);
    }
}
