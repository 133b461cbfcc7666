/*!
# SoulScript - reflective journaling with spiritual guidance

This file contains the main application flow, coordinating the various components
to implement each command.

## Usage

```
soulscript [OPTIONS] <COMMAND>

Commands:
  reflect    Compose guidance for what's on your heart and save it
  wisdom     Show a random verse of wisdom
  challenge  Guidance for a life challenge
  journey    Analyse patterns and growth across saved reflections
  history    Show saved reflections

Options:
      --local                    Use only the local guidance engine
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
      --log-level <LOG_LEVEL>    Log level filter; overrides RUST_LOG
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `SOULSCRIPT_DIR`: data directory (defaults to "~/.soulscript")
- `GEMINI_API_KEY`: enables remote guidance
- `SOULSCRIPT_MODEL`, `SOULSCRIPT_API_URL`: remote model and endpoint
- `SOULSCRIPT_SEED`: makes local random choices reproducible
*/

use clap::Parser;
use soulscript::cli::render::{
    render_challenge, render_entry, render_history, render_journey, render_recurring_theme,
    render_wisdom,
};
use soulscript::cli::{CliArgs, Command};
use soulscript::config::Config;
use soulscript::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use soulscript::errors::AppResult;
use soulscript::logging::init_tracing;
use soulscript::ops::{self, GuidanceContext};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

/// The main entry point for the soulscript application.
///
/// Initializes logging, opens the root span carrying a correlation id, runs the
/// command, and logs any error once before exiting non-zero.
fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = init_tracing(&args.log_format, args.log_level.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and dispatches the parsed command.
///
/// # Errors
///
/// Returns any configuration, input or history error. Remote failures are not
/// errors here; they are reported as a notice and local guidance is shown.
fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting soulscript");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let mut ctx = GuidanceContext::from_config(&config, args.local)?;

    match args.command {
        Command::Reflect { text } => {
            let outcome = ops::reflect(&text.join(" "), &mut ctx)?;
            report_fallback(outcome.fallback_reason.as_deref());
            println!("{}", render_entry(&outcome.entry));
            if let Some(theme) = &outcome.recurring_theme {
                println!("\n{}", render_recurring_theme(theme));
            }
        }
        Command::Wisdom => {
            let outcome = ops::wisdom(&mut ctx)?;
            report_fallback(outcome.fallback_reason.as_deref());
            println!("{}", render_wisdom(&outcome.value));
        }
        Command::Challenge { id } => {
            let outcome = ops::challenge(id, &mut ctx)?;
            report_fallback(outcome.fallback_reason.as_deref());
            println!("{}", render_challenge(&outcome.value));
        }
        Command::Journey => {
            let outcome = ops::journey(&mut ctx)?;
            report_fallback(outcome.fallback_reason.as_deref());
            println!("{}", render_journey(&outcome.value));
        }
        Command::History { limit } => {
            let entries = ops::history(&ctx, limit)?;
            println!("{}", render_history(&entries));
        }
    }

    info!("Command completed");
    Ok(())
}

fn report_fallback(reason: Option<&str>) {
    if let Some(reason) = reason {
        eprintln!("Note: remote guidance unavailable ({}). Showing local guidance.", reason);
    }
}
