use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use core_automaton::{
    build_headless_app, load_config_from_env, run_turn, Automaton, LifeState, SimulationConfig,
    SimulationMetrics, TerrainState,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the two-layer automaton without a renderer", long_about = None)]
struct Cli {
    /// JSON run config; falls back to AUTOMATON_CONFIG_PATH, then defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    columns: Option<usize>,
    /// Generator seed; 0 picks one from the OS.
    #[arg(long)]
    seed: Option<u64>,
    /// Generations to advance before exiting.
    #[arg(long, default_value_t = 500)]
    generations: u64,
    /// Log a population summary every N generations.
    #[arg(long, default_value_t = 50)]
    report_every: u64,
    /// Print the final grid as text.
    #[arg(long)]
    render: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let mut app = build_headless_app(&config)?;

    info!(
        target: "cell_automaton::headless",
        rows = config.rows,
        columns = config.columns,
        generations = cli.generations,
        "headless run starting"
    );

    for _ in 0..cli.generations {
        run_turn(&mut app);
        let metrics = app.world.resource::<SimulationMetrics>();
        if cli.report_every > 0 && metrics.generation % cli.report_every == 0 {
            report(metrics);
        }
    }

    let metrics = app.world.resource::<SimulationMetrics>();
    report(metrics);

    if cli.render {
        let automaton = app.world.resource::<Automaton>();
        print!("{}", automaton.grid().render_text());
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_config_from_env(),
    };
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn report(metrics: &SimulationMetrics) {
    info!(
        target: "cell_automaton::headless",
        generation = metrics.generation,
        blank = metrics.terrain_count(TerrainState::Blank),
        grassland = metrics.terrain_count(TerrainState::Grassland),
        forest = metrics.terrain_count(TerrainState::Forest),
        on_fire = metrics.terrain_count(TerrainState::OnFire),
        alive = metrics.life_count(LifeState::Alive),
        infected = metrics.life_count(LifeState::Infected),
        fingerprint = metrics.fingerprint,
        "population"
    );
}
