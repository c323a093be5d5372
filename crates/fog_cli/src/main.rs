//! fog_chess CLI
//!
//! Replay the demo game, play hot-seat over stdin, or run random self-play.

use fog_cli::{run_demo, CliConfig, MatchConfig, MatchRunner, Reply, Session};
use fog_core::{Engine, Perspective};
use random_engine::RandomEngine;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Fog-of-war chess");
    println!();
    println!("Usage:");
    println!("  fog_chess demo [--json]");
    println!("  fog_chess play");
    println!("  fog_chess selfplay [--games N] [--max-moves N] [--seed S] [--config FILE] [--json]");
    println!();
    println!("Global flags:");
    println!("  --verbose, -v   debug logging (RUST_LOG overrides)");
    println!();
    println!("Examples:");
    println!("  fog_chess selfplay --games 20 --seed 7");
    println!("  RUST_LOG=fog_core=trace fog_chess demo");
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo_cmd(args: &[String]) -> Result<(), String> {
    let json = args.iter().any(|a| a == "--json");
    let (game, steps) = run_demo();
    for s in &steps {
        info!(start = s.start, end = s.end, accepted = s.accepted, "demo move");
    }

    let board = game.view(Perspective::Audience);
    if json {
        let out = serde_json::json!({
            "steps": steps,
            "status": game.status(),
            "board": board,
        });
        let text = serde_json::to_string_pretty(&out).map_err(|e| format!("Failed to serialize: {}", e))?;
        println!("{}", text);
    } else {
        println!("{}", game.status());
        println!("{}", board);
    }
    Ok(())
}

fn run_play() -> Result<(), String> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.game().view(Perspective::White)).ok();
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read stdin: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }
        match session.handle_line(&line) {
            Reply::Text(text) => {
                writeln!(stdout, "{}", text).ok();
                stdout.flush().ok();
            }
            Reply::Quit => break,
        }
    }
    Ok(())
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, name: &str) -> Result<T, String> {
    args.get(i + 1)
        .ok_or_else(|| format!("{} requires a value", name))?
        .parse()
        .map_err(|_| format!("Invalid value for {}", name))
}

fn run_selfplay(args: &[String]) -> Result<(), String> {
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path: String = flag_value(args, i, "--config")?;
            CliConfig::load(Path::new(&path))?.selfplay
        }
        None => MatchConfig::default(),
    };
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                config.num_games = flag_value(args, i, "--games")?;
                i += 1;
            }
            "--max-moves" | "-m" => {
                config.max_moves = flag_value(args, i, "--max-moves")?;
                i += 1;
            }
            "--seed" | "-s" => {
                config.seed = Some(flag_value(args, i, "--seed")?);
                i += 1;
            }
            "--config" => i += 1,
            "--json" => json = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let (mut engine1, mut engine2) = match config.seed {
        Some(seed) => (
            RandomEngine::with_seed(seed),
            RandomEngine::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomEngine::new(), RandomEngine::new()),
    };

    info!(
        games = config.num_games,
        max_moves = config.max_moves,
        seed = ?config.seed,
        "starting self-play: {} vs {}",
        engine1.name(),
        engine2.name()
    );
    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| format!("Failed to serialize: {}", e))?;
        println!("{}", text);
    } else {
        println!("=== Final Result ===");
        println!(
            "engine1: {} wins, {} losses, {} unfinished",
            result.wins, result.losses, result.unfinished
        );
        println!("Score: {:.1}%", result.score() * 100.0);
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    if args.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[0].as_str() {
        "demo" => run_demo_cmd(&args[1..]),
        "play" => run_play(),
        "selfplay" | "self-play" => run_selfplay(&args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("Unknown command: {}", other)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
