//! cfq - create quota definitions from the command line

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cfq::Result;
use cfq::app::AppContext;
use cfq::cli::Cli;
use cfq::cli::output::{RobotUi, TerminalUi, Ui, conclude};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut ui: Box<dyn Ui> = if cli.robot {
        Box::new(RobotUi::new())
    } else {
        Box::new(TerminalUi::new())
    };

    let result = run(&cli, ui.as_mut());
    if conclude(ui.as_mut(), result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: &Cli, ui: &mut dyn Ui) -> Result<()> {
    cfq::cli::commands::validate(&cli.command)?;
    let ctx = AppContext::from_cli(cli)?;
    cfq::cli::commands::run(&ctx, &cli.command, ui)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,cfq=info",
        1 => "info,cfq=debug",
        2 => "debug,cfq=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
