use clap::Parser;
use depslot::tooling::cli::{Cli, CliContext, Commands};
use std::fs;
use tempfile::TempDir;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["depslot-demo", "run"],
        vec!["depslot-demo", "run", "--no-providers"],
        vec!["depslot-demo", "run", "--format", "json"],
        vec!["depslot-demo", "slots"],
        vec!["depslot-demo", "--log-level", "debug", "slots", "--format", "json"],
        vec!["depslot-demo", "--config", "./depslot.toml", "run"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["depslot-demo", "deploy"]).is_err());
    assert!(Cli::try_parse_from(["depslot-demo"]).is_err());
}

#[test]
fn context_from_config_file_runs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("demo.toml");
    fs::write(&path, "[registry]\nduplicate_policy = \"overwrite\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "depslot-demo",
        "--config",
        path.to_str().unwrap(),
        "run",
        "--no-providers",
    ])
    .unwrap();
    let context = CliContext::new(cli.config.clone()).unwrap();
    context.register().unwrap();
    let output = context.execute(&cli.command).unwrap();
    assert!(output.starts_with("Welcome, Guest!"));
    assert!(matches!(cli.command, Commands::Run { no_providers: true, .. }));
}
