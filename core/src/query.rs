//! Read-only service queries.
//!
//! The tool is spawned directly with `[tool, kind, service]` as its argument
//! vector. No shell is involved, so nothing in the arguments is interpreted.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

use grazr_helper_common::model::{QueryKind, Service};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("systemctl failed: could not run {}: {source}", .tool.display())]
pub struct QueryError {
    pub tool: PathBuf,
    #[source]
    pub source: io::Error,
}

/// What the tool reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutput {
    /// Exit code of the tool, or `128 + signal` when it was killed.
    pub exit_code: i32,
    pub text: String,
}

pub fn query_service(
    service: Service,
    kind: QueryKind,
    tool: &Path,
) -> Result<QueryOutput, QueryError> {
    let mut command = Command::new(tool);
    command.arg(kind.as_str()).arg(service.unit_name());

    info!(
        "Executing: {:?} {:?} {:?}",
        tool.display().to_string(),
        kind.as_str(),
        service.unit_name()
    );

    let output: Output = command.output().map_err(|source| QueryError {
        tool: tool.to_path_buf(),
        source,
    })?;

    let exit_code = exit_code_of(output.status);
    info!("systemctl result code: {exit_code}");

    Ok(QueryOutput {
        exit_code,
        text: summarize(&output.stdout, &output.stderr, exit_code),
    })
}

/// Prefers stdout, then stderr, then a synthesized line.
fn summarize(stdout: &[u8], stderr: &[u8], exit_code: i32) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    [stdout.trim(), stderr.trim()]
        .into_iter()
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Completed code {exit_code}"))
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
