use std::fs::File;
use std::io::{BufReader, Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "jsonsafe-cli",
    about = "Normalize tagged data-layer JSON into client-safe JSON",
    version
)]
struct Args {
    /// Fail on unknown tags and malformed envelopes instead of passing them through
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Key naming the tag of an envelope
    #[arg(long, default_value = "$type")]
    type_key: String,

    /// Key holding the payload of an envelope
    #[arg(long, default_value = "value")]
    value_key: String,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = jsonsafe::Options {
        strict: args.strict,
        type_key: args.type_key,
        value_key: args.value_key,
    };

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(stdin().lock()),
    };

    let value = jsonsafe::from_tagged_reader(reader, &options).context("decoding input")?;
    debug!(json_safe = value.is_json_safe(), "decoded input");
    let safe = jsonsafe::normalize(&value);

    let out = if args.pretty {
        jsonsafe::to_string_pretty(&safe)?
    } else {
        jsonsafe::to_string(&safe)?
    };
    info!(bytes = out.len(), "writing normalized output");

    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", out)?;
    Ok(())
}
