//! Simple CLI that reads a page from stdin and writes the extracted data as
//! JSON to stdout.
//!
//! Usage:
//!   extract_stdin listing < news.html
//!   extract_stdin item 8863 < item.html
//!
//! Logs go to stderr; set `RUST_LOG=rs_hackernews=debug` to see them.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use rs_hackernews::{extract_item_with_options, extract_listing_with_options, Options};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: extract_stdin listing | extract_stdin item <id>";

enum Command {
    Listing,
    Item(u64),
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [cmd] if cmd == "listing" => Some(Command::Listing),
        [cmd, id] if cmd == "item" => id.parse().ok().map(Command::Item),
        _ => None,
    }
}

fn run(command: &Command, html: &str) -> Result<String, Box<dyn std::error::Error>> {
    let options = Options::default();
    let json = match command {
        Command::Listing => serde_json::to_string(&extract_listing_with_options(html, &options)?)?,
        Command::Item(id) => serde_json::to_string(&extract_item_with_options(html, *id, &options)?)?,
    };
    Ok(json)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        eprintln!("failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(bytes = html.len(), "read page");

    match run(&command, &html) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("extraction failed: {err}");
            ExitCode::FAILURE
        }
    }
}
