use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use rendezvous_core::config::{CliOverrides, RendezvousConfig};
use rendezvous_core::errors::{ConfigError, GraphError, InputError, RendezvousErrorCode};
use rendezvous_graph::{parse_scenario, TraversalEngine};

#[derive(Parser, Debug)]
#[command(
    name = "rendezvous",
    version,
    about = "Print every location where a downstream and an upstream traveler can meet"
)]
struct Cli {
    /// Scenario file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, env = "RENDEZVOUS_CONFIG")]
    config: Option<PathBuf>,

    /// Also print both reach sets
    #[arg(long)]
    explain: bool,

    /// Run the two traversals concurrently
    #[arg(long, conflicts_with = "sequential")]
    parallel: bool,

    /// Run the two traversals one after the other
    #[arg(long)]
    sequential: bool,

    /// Treat forbidden locations like any other location
    #[arg(long)]
    include_forbidden: bool,

    /// Line that ends the edge list
    #[arg(long)]
    avoid_marker: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let parallel = if self.parallel {
            Some(true)
        } else if self.sequential {
            Some(false)
        } else {
            None
        };
        CliOverrides {
            skip_forbidden: self.include_forbidden.then_some(false),
            parallel,
            avoid_marker: self.avoid_marker.clone(),
        }
    }
}

fn main() -> ExitCode {
    rendezvous_core::tracing::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "rendezvous failed");
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = RendezvousConfig::load(cli.config.as_deref(), Some(&cli.overrides()))?;

    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            solve(BufReader::new(file), &config, cli.explain, out)
        }
        None => solve(io::stdin().lock(), &config, cli.explain, out),
    }
}

/// Parse one scenario and write its meeting points, one per line.
fn solve<R: BufRead, W: Write>(
    reader: R,
    config: &RendezvousConfig,
    explain: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let scenario = parse_scenario(reader, &config.input)?;
    let engine = TraversalEngine::new(config.traversal.clone());

    if explain {
        let report = engine.meeting_report(
            &scenario.graph,
            &scenario.first_starts,
            &scenario.second_starts,
        )?;
        writeln!(out, "downstream: {}", join(report.downstream.iter()))?;
        writeln!(out, "upstream: {}", join(report.upstream.iter()))?;
        writeln!(out, "meeting points:")?;
        for name in &report.meeting_points {
            writeln!(out, "{name}")?;
        }
    } else {
        let points = engine.meeting_points(
            &scenario.graph,
            &scenario.first_starts,
            &scenario.second_starts,
        )?;
        for name in &points {
            writeln!(out, "{name}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn join<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names.map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// `[CODE] message` for our own errors, the plain chain for anything else.
fn render_error(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<GraphError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<InputError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.coded_string()
    } else {
        format!("{err:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND: &str = "Map:\nA B\nB D\nA C\nC D\nAvoid:\nC\nPeggy:\nA\nSam:\nD\n";

    fn solve_to_string(input: &str, config: &RendezvousConfig, explain: bool) -> String {
        let mut out = Vec::new();
        solve(input.as_bytes(), config, explain, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_meeting_points_one_per_line() {
        let output = solve_to_string(DIAMOND, &RendezvousConfig::default(), false);
        assert_eq!(output, "A\nB\nD\n");
    }

    #[test]
    fn include_forbidden_walks_through_avoided_locations() {
        let mut config = RendezvousConfig::default();
        config.traversal.skip_forbidden = Some(false);
        let output = solve_to_string(DIAMOND, &config, false);
        assert_eq!(output, "A\nB\nC\nD\n");
    }

    #[test]
    fn explain_prints_both_reach_sets() {
        let output = solve_to_string(DIAMOND, &RendezvousConfig::default(), true);
        assert_eq!(
            output,
            "downstream: A B D\nupstream: A B D\nmeeting points:\nA\nB\nD\n"
        );
    }

    #[test]
    fn empty_intersection_prints_nothing() {
        let input = "Map:\nA B\nAvoid:\nB\nPeggy:\nA\nSam:\nB\n";
        let output = solve_to_string(input, &RendezvousConfig::default(), false);
        assert!(output.is_empty());
    }

    #[test]
    fn unknown_start_renders_not_found_code() {
        let input = "Map:\nA B\nAvoid:\n\nPeggy:\nZ\nSam:\nB\n";
        let mut out = Vec::new();
        let err = solve(input.as_bytes(), &RendezvousConfig::default(), false, &mut out)
            .unwrap_err();
        assert_eq!(render_error(&err), "[NOT_FOUND] location not found: Z");
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_input_renders_input_error_code() {
        let input = "Map:\nA B\n";
        let mut out = Vec::new();
        let err = solve(input.as_bytes(), &RendezvousConfig::default(), false, &mut out)
            .unwrap_err();
        assert!(render_error(&err).starts_with("[INPUT_ERROR]"));
    }

    #[test]
    fn flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "rendezvous",
            "--sequential",
            "--include-forbidden",
            "--avoid-marker",
            "Blocked:",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.parallel, Some(false));
        assert_eq!(overrides.skip_forbidden, Some(false));
        assert_eq!(overrides.avoid_marker.as_deref(), Some("Blocked:"));

        let cli = Cli::try_parse_from(["rendezvous"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.parallel, None);
        assert_eq!(overrides.skip_forbidden, None);
    }

    #[test]
    fn parallel_and_sequential_conflict() {
        assert!(Cli::try_parse_from(["rendezvous", "--parallel", "--sequential"]).is_err());
    }

    #[test]
    fn run_reads_scenario_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scenario.txt");
        std::fs::write(&path, DIAMOND).unwrap();
        let args: Vec<std::ffi::OsString> = vec![
            "rendezvous".into(),
            "--input".into(),
            path.clone().into_os_string(),
            "--parallel".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\nB\nD\n");
    }
}
