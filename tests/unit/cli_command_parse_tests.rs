use clap::Parser;

use cfq::cli::commands::create_quota::CreateQuotaArgs;
use cfq::cli::{Cli, Commands};
use cfq::core::requirements::{self, Requirement};

fn parse(args: &[&str]) -> CreateQuotaArgs {
    let mut argv = vec!["cfq", "create-quota"];
    argv.extend_from_slice(args);
    let Commands::CreateQuota(args) = Cli::parse_from(argv).command;
    args
}

#[test]
fn parse_name_only() {
    let args = parse(&["my-quota"]);
    assert_eq!(args.quota_name().unwrap(), "my-quota");
    assert!(args.total_memory.is_none());
    assert!(args.instance_memory.is_none());
    assert!(args.app_instances.is_none());
    assert!(args.reserved_route_ports.is_none());
    assert!(!args.allow_paid_service_plans);
}

#[test]
fn parse_name_with_spaces_after_flags() {
    let args = parse(&["-m", "50G", "erryday makin fitty jeez"]);
    assert_eq!(args.quota_name().unwrap(), "erryday makin fitty jeez");
    assert_eq!(args.total_memory.as_deref(), Some("50G"));
}

#[test]
fn parse_negative_values() {
    let args = parse(&["-i", "-1", "-a", "-1", "yo"]);
    assert_eq!(args.instance_memory.as_deref(), Some("-1"));
    assert_eq!(args.app_instances, Some(-1));
    assert_eq!(args.quota_name().unwrap(), "yo");
}

#[test]
fn arity_is_checked_by_the_command() {
    assert!(parse(&[]).quota_name().is_err());
    assert!(parse(&["quota", "extra-arg"]).quota_name().is_err());
    assert!(parse(&["whoops", "12"]).quota_name().is_err());
}

#[test]
fn parsed_flags_drive_the_plan() {
    let plan = requirements::plan(&parse(&["domain-name", "-a", "2"]).flags());
    assert!(matches!(
        &plan[1],
        Requirement::MinApiVersion { feature, .. } if feature == "Option '-a'"
    ));

    let plan = requirements::plan(&parse(&["domain-name", "--reserved-route-ports", "3"]).flags());
    assert!(matches!(
        &plan[1],
        Requirement::MinApiVersion { feature, .. } if feature == "Option '--reserved-route-ports'"
    ));

    assert_eq!(requirements::plan(&parse(&["quota"]).flags()), vec![Requirement::Login]);
}

#[test]
fn non_integer_counts_are_rejected_by_the_parser() {
    let result = Cli::try_parse_from(["cfq", "create-quota", "-r", "many", "q"]);
    assert!(result.is_err());
}
