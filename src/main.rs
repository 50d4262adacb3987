use std::env;
use std::fs::File;
use std::io::{self, Read};

use pizza_bill::Engine;
use pizza_bill::csv::read_commands;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "-".to_string());

    let input: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin())
    } else {
        if !path.ends_with(".csv") {
            warn!(path, "script file seems to not be a csv file");
        }
        match File::open(&path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                error!(path, "failed to open script: {e}");
                std::process::exit(1);
            }
        }
    };

    // malformed rows are reported and skipped
    let commands = read_commands(input).filter_map(|result| match result {
        Ok(command) => Some(command),
        Err(e) => {
            warn!("{e}");
            None
        }
    });

    let mut engine = Engine::new();
    let stdout = io::stdout();
    if let Err(e) = engine
        .run(tokio_stream::iter(commands), &mut stdout.lock())
        .await
    {
        error!("failed to write output: {e}");
        std::process::exit(1);
    }
}
