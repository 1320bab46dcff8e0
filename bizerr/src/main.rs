#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command};
use bizerr_config::Config;
use bizerr_core::{BusinessError, Catalog, Cause, wrap};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    bizerr_telemetry::init(&config.logging)?;

    tracing::debug!(config_path = %args.config.display(), "starting bizerr");

    let catalog = config.build_catalog()?;

    match args.command {
        Command::Check => {
            println!(
                "{}: {} error codes, fallback {}",
                args.config.display(),
                catalog.len(),
                catalog.fallback().code()
            );
        }
        Command::List => {
            for error in &catalog {
                println!("{}", describe(error));
            }
        }
        Command::Explain { code } => {
            let error = lookup(&catalog, &code)?;
            println!("{}", describe(error));
        }
        Command::Resolve { codes } => {
            let response = catalog.respond(Some(simulate(&catalog, &codes)?));
            println!("{}", response.status());
            println!("{}", serde_json::to_string_pretty(&response.body())?);
        }
    }

    Ok(())
}

fn lookup<'a>(catalog: &'a Catalog, code: &str) -> anyhow::Result<&'a BusinessError> {
    catalog
        .get(code)
        .ok_or_else(|| anyhow::anyhow!("unknown error code: {code}"))
}

/// One line per descriptor: status, code, message
fn describe(error: &BusinessError) -> String {
    let status = error
        .status()
        .map_or_else(|| "---".to_owned(), |status| status.as_u16().to_string());

    format!("{status} {} {}", error.code(), error.message())
}

/// Build a chain with `codes[0]` outermost around a simulated leaf failure
fn simulate(catalog: &Catalog, codes: &[String]) -> anyhow::Result<Cause> {
    let mut cause = Cause::msg("simulated failure");

    for code in codes.iter().rev() {
        let error = lookup(catalog, code)?;
        cause = Cause::from(wrap(error.clone(), Some(cause)));
    }

    Ok(cause)
}
