//! fisr - Fast Inverse Square Root
//!
//! CLI entry point: IEEE 754 layout display, single-value comparison, and
//! the timing comparison against `1/sqrt(x)`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fisr::bench::{self, BenchConfig, BenchReport};
use fisr::config::FisrConfig;
use fisr::format::{comparison_rows, preview};
use fisr::ieee754::{describe, Ieee754Parts};
use fisr::rsqrt::{approx_inv_sqrt, initial_guess, reference_inv_sqrt, relative_error};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fisr")]
#[command(version)]
#[command(about = "Fast inverse square root demo and benchmark", long_about = None)]
struct Cli {
    /// Config file (default: search for fisr.toml from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace; RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo and then the benchmark (default)
    All,

    /// Show the bit layout of one value and compare both methods on it
    Demo {
        /// Value to inspect (default: 18.75)
        #[arg(long, allow_negative_numbers = true)]
        value: Option<f32>,
    },

    /// Time both methods over a list of random inputs
    Bench {
        /// Number of random inputs
        #[arg(short, long)]
        samples: Option<usize>,

        /// Lower bound of the input range (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f32>,

        /// Upper bound of the input range (exclusive)
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f32>,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the IEEE 754 layout of a value
    Bits {
        /// Value to decompose
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => FisrConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FisrConfig::load_from_cwd().context("Failed to load fisr.toml")?,
    };

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => {
            cmd_demo(config.demo.value);
            cmd_bench(&config.bench, false)
        }
        Commands::Demo { value } => {
            cmd_demo(value.unwrap_or(config.demo.value));
            Ok(())
        }
        Commands::Bench {
            samples,
            low,
            high,
            seed,
            json,
        } => {
            let mut bench_config = config.bench;
            if let Some(samples) = samples {
                bench_config.samples = samples;
            }
            if let Some(low) = low {
                bench_config.low = low;
            }
            if let Some(high) = high {
                bench_config.high = high;
            }
            if seed.is_some() {
                bench_config.seed = seed;
            }
            cmd_bench(&bench_config, json)
        }
        Commands::Bits { value } => {
            cmd_bits(value);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::new()
        .filter_or(env_logger::DEFAULT_FILTER_ENV, level)
        .write_style(env_logger::DEFAULT_WRITE_STYLE_ENV);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn cmd_demo(x: f32) {
    println!("==========");
    println!("IEEE 754 standard and comparison of 1/sqrt() and FastInvSqrt()");
    println!("==========");

    println!("{}", describe(x));
    println!("  fields: {}", Ieee754Parts::of(x).grouped());

    if !(x.is_finite() && x > 0.0) {
        log::warn!("{} is outside the approximation's domain (positive, finite)", x);
    }

    let exact = reference_inv_sqrt(x);
    let approx = approx_inv_sqrt(x);
    println!("1/sqrt(x) result: Method I. sqrt() vs Method II. FastInvSqrt()");
    println!("\t{} vs {}", exact, approx);
    log::info!(
        "initial guess {} ({:.3e} rel), refined {} ({:.3e} rel)",
        initial_guess(x),
        relative_error(initial_guess(x), exact),
        approx,
        relative_error(approx, exact)
    );
}

fn cmd_bench(config: &BenchConfig, json: bool) -> Result<()> {
    let report = bench::run(config).context("Benchmark failed")?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &BenchReport) {
    let shown = report.config.preview;
    let listed = shown.max(1).min(report.inputs.len());

    println!();
    println!("==========");
    println!("Results Comparison and result analysis");
    println!("Method I. sqrt() vs Method II. FastInvSqrt()");
    println!("==========");
    println!("First {} random numbers: ", listed);
    println!("{}", preview(&report.inputs, shown));

    println!();
    println!("First {} inverse square root results: ", listed);
    for row in comparison_rows(&report.reference, &report.approx, shown) {
        println!("{}", row);
    }
    println!();

    println!(
        "Time [ns] elapsed : \n\t{} vs {}.",
        report.reference_ns, report.approx_ns
    );
    println!();
    match report.speedup {
        Some(s) => println!("Speedup = {:.3}", s),
        None => println!("Speedup = n/a (approximation finished in 0 ns)"),
    }
    println!(
        "Relative error: max {:.3e}, mean {:.3e}",
        report.errors.max_relative, report.errors.mean_relative
    );
}

fn cmd_bits(x: f32) {
    let parts = Ieee754Parts::of(x);
    println!("{}", describe(x));
    println!("  fields: {}", parts.grouped());
    println!("  {}", parts);
    println!("  hex: 0x{:08X}", x.to_bits());
}
