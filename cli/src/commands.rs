use std::path::PathBuf;

use clap::Parser;
use grazr_helper_common::config::Config;
use grazr_helper_common::model::ip::LOOPBACK;
use grazr_helper_common::request::Request;

/// Flags are taken as plain strings: allowlist checks, and the exit codes
/// that go with them, belong to the policy gate.
#[derive(Parser, Debug)]
#[command(name = "grazr-root-helper", version)]
#[command(about = "Root helper: checks services and manages hosts file entries.")]
pub struct CommandLine {
    /// status, is-active, is-enabled, is-failed, add_host_entry or remove_host_entry
    #[arg(long)]
    pub action: String,

    /// Service unit to query
    #[arg(long)]
    pub service: Option<String>,

    /// Domain name for hosts file actions
    #[arg(long)]
    pub domain: Option<String>,

    /// IP address for add_host_entry
    #[arg(long, default_value = LOOPBACK)]
    pub ip: String,

    /// Path to the hosts file (e.g. /etc/hosts)
    #[arg(long)]
    pub hosts_path: Option<PathBuf>,

    /// Comment marker for hosts file entries
    #[arg(long)]
    pub hosts_marker: Option<String>,

    /// Path to the systemctl executable
    #[arg(long)]
    pub systemctl_path: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
        }
    }

    pub fn into_request(self) -> Request {
        Request {
            action: self.action,
            service: self.service,
            domain: self.domain,
            ip: Some(self.ip),
            hosts_path: self.hosts_path,
            hosts_marker: self.hosts_marker,
            tool_path: self.systemctl_path,
        }
    }
}
