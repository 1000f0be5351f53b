mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use grazr_helper_common::exit::HelperExit;
use grazr_helper_common::request::Request;
use grazr_helper_core::runner::{self, Outcome};
use grazr_helper_core::{HelperError, policy};
use terminal::{logging, print};
use tracing::{error, warn};

fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args() {
        Ok(commands) => commands,
        Err(err) => return usage_failure(err),
    };

    let cfg = commands.config();
    if let Err(err) = logging::init(&cfg) {
        eprintln!("Failed to initialise logging: {err:#}");
        return HelperExit::Internal.into();
    }

    if !is_root::is_root() {
        warn!("Not running as root; privileged operations may fail.");
    }

    match run(commands.into_request()) {
        Ok(outcome) => {
            print::result(&outcome);
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            error!("{}", diagnostic(&err));
            exit_code_for(&err).into()
        }
    }
}

/// Gate first, then the side effect. Nothing runs for a rejected request.
fn run(request: Request) -> anyhow::Result<Outcome> {
    let action = policy::authorize(&request).map_err(HelperError::from)?;
    Ok(runner::execute(action)?)
}

/// One line for stderr. The error texts already embed their cause, so the
/// source chain is not appended again.
fn diagnostic(err: &anyhow::Error) -> String {
    err.to_string()
}

fn exit_code_for(err: &anyhow::Error) -> HelperExit {
    err.downcast_ref::<HelperError>()
        .map(HelperError::exit_code)
        .unwrap_or(HelperExit::Internal)
}

/// Help and version requests exit cleanly; every other parse error is a
/// usage failure.
fn usage_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        HelperExit::Usage.into()
    } else {
        HelperExit::Success.into()
    }
}
