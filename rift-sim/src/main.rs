use std::{
    fs,
    io,
    path::{
        Path,
        PathBuf,
    },
    thread,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use clap::Parser;
use rift_battle::battle::{
    BattleBuilder,
    BattleEngineOptions,
    BattleOptions,
    BattleSummary,
    Controller,
    Reward,
};
use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Runs seeded AI-vs-AI battles and prints one JSON report per battle.
#[derive(Debug, Parser)]
#[command(name = "rift-sim")]
struct Args {
    /// JSON file describing the battle.
    options: PathBuf,

    /// JSON file of engine options.
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Number of battles to run, each on its own thread.
    #[arg(long, short = 'n', default_value_t = 1)]
    battles: u64,

    /// Seed of the first battle. Every following battle uses the next seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Include every log message in the report.
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Maximum level of engine logs written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: tracing_core::Level,
}

#[derive(Debug, Serialize)]
struct BattleReport {
    seed: u64,
    summary: BattleSummary,
    rewards: Vec<(usize, Reward)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    log: Vec<String>,
}

fn read_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

fn run_battle(
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    seed: u64,
    verbose: bool,
) -> Result<BattleReport> {
    let mut battle = BattleBuilder::new(options)
        .with_seed(seed)
        .build(engine_options)?;
    battle
        .start()
        .with_context(|| format!("battle with seed {seed} failed"))?;
    let log = if verbose {
        battle
            .log()
            .entries()
            .map(|entry| entry.message.clone())
            .collect()
    } else {
        Vec::new()
    };
    Ok(BattleReport {
        seed,
        summary: battle.summary()?,
        rewards: battle.claim_rewards()?,
        log,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut options = read_json::<BattleOptions>(&args.options)?;
    for combatant in &mut options.combatants {
        if combatant.controller != Controller::Ai {
            log::warn!(
                "{} is controlled by a player, so the simulator takes over",
                combatant.echo.name
            );
            combatant.controller = Controller::Ai;
        }
    }
    let engine_options = match &args.engine {
        Some(path) => read_json::<BattleEngineOptions>(path)?,
        None => BattleEngineOptions::default(),
    };

    let verbose = args.verbose;
    let reports = thread::scope(|scope| {
        let handles = (0..args.battles)
            .map(|i| {
                let options = options.clone();
                let engine_options = engine_options.clone();
                let seed = args.seed.wrapping_add(i);
                scope.spawn(move || run_battle(options, engine_options, seed, verbose))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| Error::msg("battle thread panicked"))?
            })
            .collect::<Result<Vec<_>>>()
    })?;

    for report in reports {
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
