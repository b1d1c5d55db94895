use std::io;
use std::net::TcpStream;
use std::process;

use anyhow::Context;
use clap::Parser;
use http_get::client::{self, ClientConfig, DEFAULT_RECV_BUFFER_SIZE};
use http_get::logging;

/// Fetch a URL with a single HTTP/1.1 GET and print the raw response.
#[derive(Parser, Debug)]
#[command(name = "client", version, about)]
struct Cli {
    /// HOSTNAME[:PORT][/PATH], optionally prefixed with http:// or https://
    url: String,

    /// Bytes requested per read from the connection
    #[arg(long, default_value_t = DEFAULT_RECV_BUFFER_SIZE, value_parser = parse_buffer_size)]
    buffer_size: usize,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_buffer_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init_logging(cli.verbose).context("failed to initialize logging")?;

    let config = ClientConfig {
        recv_buffer_size: cli.buffer_size,
    };
    let stdout = io::stdout();
    client::get::<TcpStream, _>(&cli.url, stdout.lock(), &config)?;
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    let _ = e.print();
                    process::exit(1);
                }
            }
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("client: {:#}", err);
        process::exit(1);
    }
}
