//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_lookup() {
    match parse(&["deftype", "lookup", "staff_r"]) {
        CliCommand::Lookup { role, file } => {
            assert_eq!(role, "staff_r");
            assert!(file.is_none());
        }
        _ => panic!("expected Lookup"),
    }
}

#[test]
fn cli_parse_lookup_file() {
    match parse(&["deftype", "lookup", "user_r", "--file", "/tmp/default_type"]) {
        CliCommand::Lookup { role, file } => {
            assert_eq!(role, "user_r");
            assert_eq!(file.as_deref(), Some(Path::new("/tmp/default_type")));
        }
        _ => panic!("expected Lookup with --file"),
    }
}

#[test]
fn cli_parse_path() {
    match parse(&["deftype", "path"]) {
        CliCommand::Path => {}
        _ => panic!("expected Path"),
    }
}

#[test]
fn cli_lookup_requires_role() {
    assert!(Cli::try_parse_from(["deftype", "lookup"]).is_err());
}
