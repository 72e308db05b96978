use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use exodus::{
    engine::{EngineBuilder, EngineSettings},
    scenario::ScenarioLoader,
    web::{self, WebServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Exodus colony simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/last_colony.yaml")]
    scenario: PathBuf,

    /// Override turn count (uses scenario default when omitted)
    #[arg(long)]
    turns: Option<u64>,

    /// Override snapshot interval in turns
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Serve the colony over HTTP instead of running headless
    #[arg(long)]
    serve: bool,

    /// Bind host for serve mode
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for serve mode
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    let mut settings = EngineSettings::from_scenario(&scenario);
    if let Some(interval) = cli.snapshot_interval {
        settings.snapshot_interval_turns = interval;
    }
    if let Some(dir) = cli.snapshot_dir {
        settings.snapshot_dir = dir;
    }

    let mut engine = EngineBuilder::new(settings)
        .with_default_systems()
        .build_from_scenario(&scenario);

    if cli.serve {
        let config = WebServerConfig {
            host: cli.host,
            port: cli.port,
        };
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(web::run(engine, config));
    }

    let turns = scenario.turns(cli.turns);
    engine.run(turns)?;
    let colony = engine.colony();
    println!(
        "Scenario '{}' completed after {} turns. Phase: {}, colonists: {}, happiness: {}, health: {}.",
        scenario.name,
        turns,
        colony.phase().name(),
        colony.colonists().total,
        colony.happiness(),
        colony.health()
    );
    Ok(())
}
