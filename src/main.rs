use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::io::Read;
use tracing::debug;
use vinspect::{inspect_with, InspectOptions, Value};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("vinspect")
        .about("Render a JSON document as inspected values")
        .arg(
            Arg::new("input")
                .help("Input JSON file (stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("colors")
                .long("colors")
                .action(ArgAction::SetTrue)
                .help("Emit ANSI color styling"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum recursion depth for composite values"),
        )
        .arg(
            Arg::new("unbounded")
                .long("unbounded")
                .action(ArgAction::SetTrue)
                .conflicts_with("depth")
                .help("Disable the depth limit"),
        )
        .arg(
            Arg::new("break-length")
                .long("break-length")
                .value_parser(clap::value_parser!(usize))
                .help("Preferred maximum line width"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON file holding inspect options; explicit flags win"),
        )
        .get_matches();

    let mut options = match matches.get_one::<String>("config") {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path))?;
            serde_json::from_str::<InspectOptions>(&raw)
                .with_context(|| format!("invalid config file {}", path))?
        }
        None => InspectOptions::default(),
    };
    if matches.get_flag("colors") {
        options.colors = true;
    }
    if let Some(depth) = matches.get_one::<usize>("depth") {
        options.depth = Some(*depth);
    }
    if matches.get_flag("unbounded") {
        options.depth = None;
    }
    if let Some(width) = matches.get_one::<usize>("break-length") {
        options.break_length = *width;
    }

    let raw = match matches.get_one::<String>("input") {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    debug!(bytes = raw.len(), "read input document");

    let document: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;
    let value = Value::from(document);
    debug!(shape = ?value.shape(), "inspecting document");

    println!("{}", inspect_with(&value, &options));

    Ok(())
}
