//! PageKit line server
//!
//! Reads one JSON request per stdin line and writes one JSON response per
//! stdout line. Logs go to stderr; set `PAGEKIT_LOG` or `RUST_LOG` to
//! change the filter (default `info`).

mod protocol;

use pagekit::PageKit;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    let filter = EnvFilter::try_from_env("PAGEKIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let kit = PageKit::with_standard_library();
    info!(version = SERVER_VERSION, functions = kit.function_names().len(), "pagekit started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let Some(response) = protocol::handle_line(&kit, &line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("pagekit shutting down");
}
