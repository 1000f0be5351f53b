#![cfg(test)]
use std::fs;

use grazr_helper_common::exit::HelperExit;
use grazr_helper_common::request::Request;
use grazr_helper_core::runner::{self, Outcome};
use grazr_helper_core::{HelperError, policy};
use tempfile::TempDir;

fn execute(request: &Request) -> Result<Outcome, HelperError> {
    let action = policy::authorize(request)?;
    runner::execute(action)
}

/// A rejected add must leave the hosts file exactly as it was.
#[test]
fn rejected_add_has_no_side_effect() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();

    for (domain, ip) in [
        ("bad..domain", "127.0.0.1"),
        ("evil.test\n10.0.0.1 bank.test", "127.0.0.1"),
        ("app.test", "127.0.0.1 bank.test"),
    ] {
        let request = Request {
            domain: Some(domain.into()),
            ip: Some(ip.into()),
            hosts_path: Some(hosts.clone()),
            hosts_marker: Some("#grazr".into()),
            ..Request::new("add_host_entry")
        };

        let err = execute(&request).unwrap_err();
        assert_eq!(err.exit_code(), HelperExit::AddValidation);
    }

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1 localhost\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn unlisted_service_is_rejected_before_spawning() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("systemctl");
    fs::write(&tool, "").unwrap();

    let request = Request {
        service: Some("cron.service".into()),
        tool_path: Some(tool),
        ..Request::new("status")
    };

    let err = execute(&request).unwrap_err();
    assert_eq!(err.exit_code(), HelperExit::ServiceNotAllowed);
}

#[test]
fn write_failure_maps_to_operation_specific_code() {
    let dir = TempDir::new().unwrap();
    let request = |action: &str| Request {
        domain: Some("app.test".into()),
        hosts_path: Some(dir.path().to_path_buf()),
        hosts_marker: Some("#grazr".into()),
        ..Request::new(action)
    };

    let err = execute(&request("add_host_entry")).unwrap_err();
    assert_eq!(err.exit_code(), HelperExit::AddWriteFailed);

    let err = execute(&request("remove_host_entry")).unwrap_err();
    assert_eq!(err.exit_code(), HelperExit::RemoveWriteFailed);
}

#[test]
fn query_launch_failure_has_dedicated_code() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("systemctl");
    // A regular file without an interpreter or execute bit cannot be spawned.
    fs::write(&tool, "").unwrap();

    let request = Request {
        service: Some("nginx.service".into()),
        tool_path: Some(tool),
        ..Request::new("is-active")
    };

    let err = execute(&request).unwrap_err();
    assert_eq!(err.exit_code(), HelperExit::QueryLaunchFailed);
}

#[test]
#[cfg(unix)]
fn query_reports_tool_output_and_exit_code() {
    let echo = std::path::Path::new("/bin/echo");
    if !echo.is_file() {
        eprintln!("Skipping query test: /bin/echo not available.");
        return;
    }

    let request = Request {
        service: Some("dnsmasq.service".into()),
        tool_path: Some(echo.to_path_buf()),
        ..Request::new("status")
    };

    let outcome = execute(&request).unwrap();
    assert_eq!(outcome.to_string(), "Helper Result: status dnsmasq.service");
    assert_eq!(outcome.exit_code(), 0);
}
