//! Tests for flag handling and command dispatch.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use usdm_api::IdStrategy;
use usdm_cli::cli::Cli;
use usdm_cli::commands::run;
use usdm_cli::document::read_wrapper;
use usdm_cli::options::build_options;
use uuid::Uuid;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "usdm-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("usdm").chain(args.iter().copied())).unwrap()
}

#[test]
fn build_flags_reach_options() {
    let cli = parse(&[
        "--code-system-version",
        "2024-03-29",
        "--uuid-ids",
        "--sponsor-code-system",
        "ACME",
        "--sponsor-code-system-version",
        "7",
        "sample",
    ]);
    let options = build_options(&cli);
    assert_eq!(options.cdisc_code_system_version, "2024-03-29");
    assert_eq!(options.id_strategy, IdStrategy::Uuid);
    assert_eq!(options.sponsor_code_system, "ACME");
    assert_eq!(options.sponsor_code_system_version, "7");
}

#[test]
fn sponsor_version_needs_a_system() {
    let result = Cli::try_parse_from(["usdm", "--sponsor-code-system-version", "2", "sample"]);
    assert!(result.is_err());
}

#[test]
fn minimum_writes_configured_document() {
    let dir = unique_temp_dir("minimum");
    let path = dir.join("minimum.json");
    let cli = parse(&[
        "--uuid-ids",
        "--code-system-version",
        "2024-03-29",
        "minimum",
        "--title",
        "A Phase II Trial",
        "--identifier",
        "ACME-001",
        "--output",
        path.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let wrapper = read_wrapper(&path).unwrap();
    let version = &wrapper.study.versions[0];
    assert_eq!(wrapper.system_name.as_deref(), Some("usdm-cli"));
    assert!(Uuid::parse_str(&version.id).is_ok());
    assert_eq!(version.titles[0].title_type.code_system_version, "2024-03-29");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn sample_uses_sponsor_code_system() {
    let dir = unique_temp_dir("sample");
    let path = dir.join("sample.json");
    let cli = parse(&[
        "--sponsor-code-system",
        "ACME",
        "sample",
        "--compact",
        "-o",
        path.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let wrapper = read_wrapper(&path).unwrap();
    let organization = &wrapper.study.versions[0].organizations[0];
    let country = organization
        .legal_address
        .as_ref()
        .and_then(|address| address.country.as_ref())
        .unwrap();
    assert_eq!(country.code_system, "ACME");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn blank_title_fails_without_output() {
    let dir = unique_temp_dir("blank");
    let path = dir.join("minimum.json");
    let cli = parse(&[
        "minimum",
        "--title",
        "  ",
        "--identifier",
        "ACME-001",
        "-o",
        path.to_str().unwrap(),
    ]);
    let err = run(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("build minimum study"));
    assert!(!path.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_summary_file_fails() {
    let dir = unique_temp_dir("summary");
    let path = dir.join("absent.json");
    let err = run(&parse(&["summary", path.to_str().unwrap()])).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));

    fs::remove_dir_all(&dir).unwrap();
}
