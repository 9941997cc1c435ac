//! Demand-paging simulator CLI.
//!
//! This binary wires run parameters to the simulator core and owns all
//! console output. It performs:
//! 1. **Argument run:** Build a config from positional run parameters.
//! 2. **Config run:** Load a full JSON config with `--config`.
//! 3. **Reporting:** Echo the parsed parameters, then print per-process and
//!    aggregate fault/residency statistics after the run.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{Algorithm, Config, MixSpec};
use pagesim_core::{RandomSource, SimError, Simulation};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Deterministic demand-paged virtual memory simulator",
    long_about = "Simulate demand paging over a fixed frame table with a pluggable \
replacement policy (lru, fifo, random).\n\nRun parameters are positional, in the order \
the simulator historically took them, or supplied wholesale as JSON via --config.\n\n\
Examples:\n  pagesim 10 10 20 1 10 lru\n  pagesim 1000 10 10 4 10000 random -r random-numbers.txt\n  pagesim --config run.json"
)]
struct Cli {
    /// Total machine size in words.
    machine_size: Option<u64>,

    /// Page (and frame) size in words.
    page_size: Option<u64>,

    /// Virtual address space size of each process, in words.
    process_size: Option<u64>,

    /// Job mix preset (1 through 4).
    job_mix: Option<u32>,

    /// References each process issues before retiring.
    ref_count: Option<u64>,

    /// Replacement algorithm: lru, fifo, or random (case-insensitive).
    algorithm: Option<String>,

    /// JSON config file; replaces the positional parameters.
    #[arg(long, conflicts_with = "machine_size")]
    config: Option<PathBuf>,

    /// File holding the pre-recorded random number sequence.
    #[arg(short = 'r', long, default_value = "random-numbers.txt")]
    random_file: PathBuf,

    /// References per process per round-robin turn.
    #[arg(short, long)]
    quantum: Option<u64>,

    /// Log every pager decision (hit, fault, eviction).
    #[arg(short, long)]
    debug: bool,

    /// Log every value consumed from the random sequence.
    #[arg(short, long)]
    show_rand: bool,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug, cli.show_rand);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    };

    print_banner(&config);

    if let Err(err) = run(&config, &cli.random_file) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Installs the log subscriber. The pager logs under the `paging` target at
/// debug level and the random source under `draws` at trace level; the flags
/// open exactly those targets.
fn init_tracing(debug: bool, show_rand: bool) {
    let mut filter = String::from("warn");
    if debug {
        filter.push_str(",paging=debug");
    }
    if show_rand {
        filter.push_str(",draws=trace");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .without_time()
        .init();
}

/// Builds the run configuration from `--config` JSON or the positional
/// parameters.
fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = if let Some(path) = &cli.config {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("could not read config {}: {e}", path.display()))?;
        serde_json::from_str::<Config>(&contents)
            .map_err(|e| format!("could not parse config {}: {e}", path.display()))?
    } else {
        let (
            Some(machine_size),
            Some(page_size),
            Some(process_size),
            Some(job_mix),
            Some(ref_count),
            Some(algorithm),
        ) = (
            cli.machine_size,
            cli.page_size,
            cli.process_size,
            cli.job_mix,
            cli.ref_count,
            cli.algorithm.as_deref(),
        )
        else {
            return Err(
                "expected six run parameters: machine_size page_size process_size job_mix \
                 ref_count algorithm (or --config <file>)"
                    .to_string(),
            );
        };

        let mut config = Config::default();
        config.machine.machine_size = machine_size;
        config.machine.page_size = page_size;
        config.machine.algorithm = algorithm.parse::<Algorithm>().map_err(|e| e.to_string())?;
        config.workload.process_size = process_size;
        config.workload.job_mix = MixSpec::Preset(job_mix);
        config.workload.reference_count = ref_count;
        config
    };

    if let Some(quantum) = cli.quantum {
        config.workload.quantum = quantum;
    }
    config.general.trace_paging = cli.debug;
    config.general.trace_draws = cli.show_rand;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Echoes the parsed run parameters, the way the simulator historically did.
fn print_banner(config: &Config) {
    println!();
    println!("Machine size is {}", config.machine.machine_size);
    println!("Page size is {}", config.machine.page_size);
    println!("Process size is {}", config.workload.process_size);
    println!("Reference count is {}", config.workload.reference_count);
    println!("Name of algorithm is {}", config.machine.algorithm);
    println!();
}

/// Loads the random sequence, runs the simulation, and prints the report.
fn run(config: &Config, random_file: &PathBuf) -> Result<(), SimError> {
    let random = RandomSource::from_file(random_file)?;
    let report = Simulation::new(config, random)?.run()?;

    for (pid, stats) in report.processes() {
        match stats.average_residency() {
            Some(avg) => println!(
                "Process {pid} had {} faults and {avg} average residency.",
                stats.page_fault_count
            ),
            None => println!(
                "Process {pid} had {} faults.\n\tWith no evictions, the average residence is undefined.",
                stats.page_fault_count
            ),
        }
    }

    println!();
    match report.overall_average_residency() {
        Some(avg) => println!(
            "The total number of faults is {} and the overall average residency is {avg}.",
            report.total_faults()
        ),
        None => println!(
            "The total number of faults is {}.\n\tWith no evictions, the overall average residence is undefined.",
            report.total_faults()
        ),
    }

    Ok(())
}
