//! Quantia command-line front end
//!
//! Reads one JSON request per line from stdin and answers with one JSON line on
//! stdout:
//!
//! ```text
//! {"id": 1, "op": "convert", "args": ["100 km/h", "m/s"]}
//! {"id":1,"result":{"amount":27.77777777777778,"units":[...],"text":"27.77777777777778 m/s"}}
//! ```
//!
//! Operations: parse, reduce, add, subtract, multiply, divide, pow, convert,
//! compatible, format, kind, constant.
//!
//! Environment:
//! - `QUANTIA_STYLE`: `nice` (default) or `ascii` rendering
//! - `RUST_LOG`: log filter, default `info`; logs go to stderr

mod handler;

use std::env;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use quantia_units::{FormatStyle, Registry};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings read from the environment at startup
#[derive(Debug, Clone, Copy)]
struct Config {
    style: FormatStyle,
}

impl Config {
    fn from_env() -> Self {
        let style = match env::var("QUANTIA_STYLE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                warn!(%value, error = %e, "ignoring QUANTIA_STYLE");
                FormatStyle::default()
            }),
            Err(_) => FormatStyle::default(),
        };
        Config { style }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let config = Config::from_env();

    // Build the unit tables up front rather than on the first request
    let units = Registry::global().len();
    info!(version = VERSION, ?config, units, "quantia started");

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
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = handler::handle_line(line, config.style);
                let json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!(error = %e, "could not serialize response");
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
                    error!(error = %e, "could not write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "could not read input");
                break;
            }
        }
    }
}
