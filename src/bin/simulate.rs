//! Hugoland balance simulator.
//!
//! Plays scripted quiz-and-combat runs through the real reducer and reports
//! how fast a player climbs zones.
//!
//!   cargo run --bin simulate -- -n 200 -z 15 --accuracy 0.65
//!   cargo run --bin simulate -- --combat-only --seed 7 --json report.json

use hugoland::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: simulate [options]

  -n, --runs <N>          playthroughs to simulate (default 1000)
  -z, --zone <Z>          zone a run tries to reach (default 25)
  -s, --seed <S>          base seed; run i uses S + i
  -a, --accuracy <P>      chance of answering correctly, 0 to 1 (default 0.8)
  -q, --questions <Q>     questions before a run gives up (default 20000)
      --no-chests         never buy chests
      --no-research       never buy research
      --combat-only       no spending at all
      --premium           long runs toward the premium zone
      --json [PATH]       also write the report as JSON
  -v, --verbose           per-run detail
  -h, --help              print this message

RUST_LOG=hugoland=debug traces every dispatched action.";

#[derive(Debug)]
struct CliArgs {
    config: SimConfig,
    json_path: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("simulate: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = &cli.config;
    info!(
        runs = config.num_runs,
        target_zone = config.target_zone,
        accuracy = config.accuracy,
        seed = ?config.seed,
        "starting balance simulation"
    );
    let report = run_simulation(config);
    println!("{}", report.to_text());

    if let Some(path) = cli.json_path {
        if let Err(e) = std::fs::write(&path, report.to_json()) {
            eprintln!("simulate: could not write {path}: {e}");
            return ExitCode::FAILURE;
        }
        println!("JSON report written to {path}");
    }
    ExitCode::SUCCESS
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parsed<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    // Presets first so explicit flags can refine them regardless of order
    let mut config = if args.iter().any(|a| a == "--premium") {
        SimConfig::premium_run()
    } else if args.iter().any(|a| a == "--combat-only") {
        SimConfig::combat_only(SimConfig::default().num_runs)
    } else {
        SimConfig::default()
    };
    let mut json_path = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                config.num_runs = parsed(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "-z" | "--zone" => {
                config.target_zone = parsed(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parsed(value(args, i, flag)?, flag)?);
                i += 1;
            }
            "-a" | "--accuracy" => {
                let accuracy: f64 = parsed(value(args, i, flag)?, flag)?;
                if !(0.0..=1.0).contains(&accuracy) {
                    return Err(format!("{flag} must be between 0 and 1"));
                }
                config.accuracy = accuracy;
                i += 1;
            }
            "-q" | "--questions" => {
                config.max_questions_per_run = parsed(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "--no-chests" => config.open_chests = false,
            "--no-research" => config.buy_research = false,
            "--combat-only" | "--premium" => {}
            "--json" => match args.get(i + 1).filter(|next| !next.starts_with('-')) {
                Some(path) => {
                    json_path = Some(path.clone());
                    i += 1;
                }
                None => {
                    json_path = Some(format!(
                        "hugoland_sim_{}.json",
                        chrono::Utc::now().format("%Y%m%d_%H%M%S")
                    ));
                }
            },
            "-v" | "--verbose" => config.verbosity = 2,
            other => return Err(format!("unknown option {other}")),
        }
        i += 1;
    }

    if config.num_runs == 0 {
        return Err("--runs must be at least 1".to_string());
    }
    Ok(CliArgs { config, json_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.config.num_runs, 1000);
        assert_eq!(cli.config.target_zone, 25);
        assert!(cli.json_path.is_none());
    }

    #[test]
    fn test_flags_override_preset_in_any_order() {
        let cli = parse_args(&args(&["-n", "12", "--combat-only", "-a", "0.5", "-s", "9"])).unwrap();
        assert_eq!(cli.config.num_runs, 12);
        assert!(!cli.config.open_chests);
        assert!(!cli.config.buy_research);
        assert_eq!(cli.config.accuracy, 0.5);
        assert_eq!(cli.config.seed, Some(9));
    }

    #[test]
    fn test_json_takes_optional_path() {
        let cli = parse_args(&args(&["--json", "out.json", "-z", "5"])).unwrap();
        assert_eq!(cli.json_path.as_deref(), Some("out.json"));
        assert_eq!(cli.config.target_zone, 5);

        let cli = parse_args(&args(&["--json", "-z", "5"])).unwrap();
        let path = cli.json_path.unwrap();
        assert!(path.starts_with("hugoland_sim_"));
        assert!(path.ends_with(".json"));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(parse_args(&args(&["-n"])).is_err());
        assert!(parse_args(&args(&["-n", "many"])).is_err());
        assert!(parse_args(&args(&["-n", "0"])).is_err());
        assert!(parse_args(&args(&["-a", "1.5"])).is_err());
        assert!(parse_args(&args(&["--turbo"])).is_err());
    }
}
