use clap::Parser;
use co2_alert::Scenario;
use co2_alert::config::Config;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "co2-alert")]
#[command(about = "Drive CO2 readings through sensors and alert their monitors")]
struct Cli {
    /// JSON scenario file (defaults to the built-in two-monitor scenario)
    #[arg(long, env = "SCENARIO_FILE")]
    scenario: Option<PathBuf>,

    /// Print the effective scenario as JSON and exit
    #[arg(long)]
    print_scenario: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn run(cli: &Cli) -> co2_alert::error::Result<()> {
    let config = Config::load(cli.scenario.as_deref())?;

    if cli.print_scenario {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match &cli.scenario {
        Some(path) => info!("Scenario loaded from {}", path.display()),
        None => info!("Using built-in scenario"),
    }

    let mut scenario = Scenario::build(&config.scenario)?;
    scenario.run();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
