//! Purpose: Small demo that loads a JSON file both ways and prints its compact form.
//! Role: Example program; shows tracing setup and the sync/async loader parity.
//! Invariants: Exits non-zero with the error's display text when loading fails.
//! Notes: Run with `RUST_LOG=debug` to see the loader's read events.
use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use typedjson::{
    Encoding, Error, LoadOptions, is_array, is_object, load_sync_with, load_with, stringify,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: load-json <path> [encoding]");
        return ExitCode::from(2);
    };

    match run(&path, args.next().as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("load-json: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str, encoding: Option<&str>) -> Result<(), Error> {
    let encoding = match encoding {
        Some(label) => label.parse::<Encoding>()?,
        None => Encoding::default(),
    };
    let options = LoadOptions::new().encoding(encoding);

    let blocking = load_sync_with(path, &options)?;
    let suspended = load_with(path, &options).await?;
    tracing::info!(same = blocking == suspended, "compared sync and async loads");

    let shape = if is_object(&suspended) {
        "object"
    } else if is_array(&suspended) {
        "array"
    } else {
        suspended.kind().name()
    };
    println!("{shape}: {}", stringify(&suspended)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
