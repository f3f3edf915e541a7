//! Isolation CLI
//!
//! Play a single game between two agents and print the board as it goes.

use alpha_beta_engine::{AlphaBetaEngine, EngineConfig, Strategy};
use anyhow::{anyhow, bail, Context, Result};
use arena::{Arbiter, ArenaConfig};
use greedy_engine::GreedyEngine;
use isolation_core::{Agent, Player};
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Isolation Arena");
    println!();
    println!("Usage:");
    println!("  isolation play <agent1> <agent2> [options]");
    println!();
    println!("Agents:");
    println!("  alphabeta     - Iterative-deepening alpha-beta search");
    println!("  greedy        - Maximizes own liberties one ply ahead");
    println!("  random        - Uniform random legal move");
    println!();
    println!("Options:");
    println!("  --width W         Board width (default 7)");
    println!("  --height H        Board height (default 7)");
    println!("  --time-ms T       Time per move in milliseconds (default 150)");
    println!("  --depth D         Alpha-beta depth ceiling (default 32)");
    println!("  --strategy S      standard | offensive | defensive | dynamic");
    println!("  --config FILE     TOML file with [game] and [engine] tables");
    println!("  --quiet           Only print the result");
    println!();
    println!("Examples:");
    println!("  isolation play alphabeta random");
    println!("  isolation play alphabeta greedy --width 5 --height 5 --strategy offensive");
}

fn create_agent(name: &str, engine: &EngineConfig) -> Result<Box<dyn Agent>> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" => Ok(Box::new(AlphaBetaEngine::with_config(engine.clone()))),
        "greedy" => Ok(Box::new(GreedyEngine::new())),
        "random" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("unknown agent `{name}` (expected alphabeta, greedy or random)"),
    }
}

fn flag_value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", args[i]))
}

fn parse_config(args: &[String]) -> Result<ArenaConfig> {
    // The config file is the base; flags override it wherever they appear.
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = flag_value(args, i)?;
            ArenaConfig::from_toml_file(Path::new(path))
                .with_context(|| format!("loading {path}"))?
        }
        None => ArenaConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                config.game.width = flag_value(args, i)?.parse().context("--width")?;
                i += 1;
            }
            "--height" => {
                config.game.height = flag_value(args, i)?.parse().context("--height")?;
                i += 1;
            }
            "--time-ms" | "-t" => {
                config.game.time_per_move_ms = flag_value(args, i)?.parse().context("--time-ms")?;
                i += 1;
            }
            "--depth" | "-d" => {
                config.engine.max_depth = flag_value(args, i)?.parse().context("--depth")?;
                i += 1;
            }
            "--strategy" | "-s" => {
                config.engine.strategy = flag_value(args, i)?.parse::<Strategy>()?;
                i += 1;
            }
            "--config" => i += 1,
            "--quiet" | "-q" => config.game.verbose = false,
            other => bail!("unknown option `{other}`"),
        }
        i += 1;
    }

    Ok(ArenaConfig {
        game: config.game.validate()?,
        engine: config.engine.validate()?,
    })
}

fn run_play(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("play requires two agents");
    }

    let config = parse_config(&args[2..])?;
    let mut first = create_agent(&args[0], &config.engine)?;
    let mut second = create_agent(&args[1], &config.engine)?;

    println!("=== {} vs {} ===", first.name(), second.name());
    println!(
        "Board: {}x{}, {} ms per move, strategy {}",
        config.game.width, config.game.height, config.game.time_per_move_ms, config.engine.strategy
    );
    println!();

    let arbiter = Arbiter::new(config.game);
    let record = arbiter.play_game(first.as_mut(), second.as_mut())?;

    println!();
    println!("=== Final Position ===");
    println!("{}", record.final_state);
    let winner_name = match record.winner {
        Player::One => first.name(),
        Player::Two => second.name(),
    };
    println!(
        "Winner: {} ({}) by {} after {} plies",
        record.winner,
        winner_name,
        record.reason,
        record.history.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command `{other}`")
        }
    }
}
