#![cfg(test)]
use std::fs;
use std::path::Path;

use grazr_helper_common::request::Request;
use grazr_helper_core::policy;
use grazr_helper_core::runner::{self, Outcome};
use tempfile::TempDir;

const MARKER: &str = "#grazr";

fn request(action: &str, domain: &str, hosts: &Path) -> Request {
    Request {
        domain: Some(domain.to_string()),
        hosts_path: Some(hosts.to_path_buf()),
        hosts_marker: Some(MARKER.to_string()),
        ..Request::new(action)
    }
}

fn run(request: &Request) -> Outcome {
    let action = policy::authorize(request).expect("request should be authorized");
    runner::execute(action).expect("action should succeed")
}

fn leftover_temp_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .map(|e| e.file_name() != "hosts")
                .unwrap_or(false)
        })
        .count()
}

/// Adds then removes an entry and checks the file returns to its original content.
#[test]
fn add_then_remove_restores_original() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    let original = "127.0.0.1 localhost\n::1 localhost ip6-localhost\n";
    fs::write(&hosts, original).unwrap();

    let added = run(&request("add_host_entry", "app.test", &hosts));
    assert!(matches!(added, Outcome::Added { .. }));
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        format!("{original}127.0.0.1\tapp.test\t{MARKER}\n")
    );

    let removed = run(&request("remove_host_entry", "app.test", &hosts));
    assert!(matches!(removed, Outcome::Removed { count: 1, .. }));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), original);
    assert_eq!(leftover_temp_files(dir.path()), 0);
}

#[test]
fn round_trip_normalizes_missing_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 localhost").unwrap();

    run(&request("add_host_entry", "app.test", &hosts));
    run(&request("remove_host_entry", "app.test", &hosts));

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1 localhost\n");
}

#[test]
fn second_add_reports_existing_entry_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "").unwrap();
    let request = Request {
        ip: Some("127.0.0.1".into()),
        ..request("add_host_entry", "app.test", &hosts)
    };

    let first = run(&request);
    assert_eq!(first.to_string(), format!("Helper: Added app.test to {}.", hosts.display()));
    let snapshot = fs::read(&hosts).unwrap();

    let second = run(&request);
    assert_eq!(second.to_string(), "Helper: Entry for app.test exists.");
    assert_eq!(second.exit_code(), 0);
    assert_eq!(fs::read(&hosts).unwrap(), snapshot);
    assert_eq!(snapshot, b"127.0.0.1\tapp.test\t#grazr\n");
}

#[test]
fn remove_of_absent_domain_is_reported_and_harmless() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1\tother.test\t#grazr\n").unwrap();

    let outcome = run(&request("remove_host_entry", "app.test", &hosts));

    assert_eq!(outcome.to_string(), "Helper: Entry for app.test not found.");
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1\tother.test\t#grazr\n"
    );
}

#[test]
fn remove_on_missing_file_succeeds_without_creating_it() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");

    let outcome = run(&request("remove_host_entry", "app.test", &hosts));

    assert_eq!(outcome, Outcome::HostsFileMissing);
    assert_eq!(outcome.exit_code(), 0);
    assert!(!hosts.exists());
}

#[test]
fn remove_never_touches_lines_owned_by_others() {
    let dir = TempDir::new().unwrap();
    let hosts = dir.path().join("hosts");
    let original = "127.0.0.1\tapp.test\t#someone-else\n# 127.0.0.1\tapp.test\t#grazr\n";
    fs::write(&hosts, original).unwrap();

    let outcome = run(&request("remove_host_entry", "app.test", &hosts));

    assert!(matches!(outcome, Outcome::NotFound { .. }));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), original);
}
