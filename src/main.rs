//! Benchmark runner for the complex transpose-multiply strategies.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cmatmul::threaded::rows_mt::mat_mult_trans_cmplx_mt;
use cmatmul::{Strategy, avx2_available, mat_mult_trans_cmplx_with};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "cmatmul", about = "Benchmark complex transpose-multiply kernels")]
struct Cli {
    /// Square problem sizes (M = N = O) to run
    #[arg(long, value_delimiter = ',', default_value = "64,128,256")]
    sizes: Vec<usize>,

    /// Timed runs per method (after one warmup)
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Maximum threads for the multi-threaded runs
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Strategies to run: basic, tiled, avx2, auto
    #[arg(long, value_delimiter = ',', default_value = "basic,tiled,avx2")]
    strategies: Vec<String>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    if cli.sizes.is_empty() || cli.iterations == 0 {
        bail!("need at least one size and one iteration");
    }

    let strategies = cli
        .strategies
        .iter()
        .map(|s| s.parse::<Strategy>())
        .collect::<Result<Vec<_>, _>>()
        .context("parsing --strategies")?;
    if strategies.is_empty() {
        bail!("need at least one strategy");
    }

    println!("=== Complex Transpose-Multiply Benchmark ===\n");
    info!(avx2_fma = avx2_available(), "CPU features");

    if strategies.contains(&Strategy::Avx2) && !avx2_available() {
        warn!("AVX2/FMA not available, avx2 runs fall back to the tiled kernel");
    }

    let mut all_results = Vec::new();

    for &size in &cli.sizes {
        println!("Matrix: {}×{}×{} complex", size, size, size);
        println!("{}", "-".repeat(50));

        let (m, n, o) = (size, size, size);
        let a: Vec<f32> = (0..2 * m * n).map(|i| (i % 100) as f32 / 100.0).collect();
        let b: Vec<f32> = (0..2 * o * n).map(|i| (i % 97) as f32 / 97.0).collect();

        let mut results: Vec<(String, (f64, f64))> = Vec::new();

        for &strategy in &strategies {
            results.push((
                strategy.name().to_string(),
                bench_fn(&a, &b, m, n, o, cli.iterations, |a, b, c, m, n, o| {
                    mat_mult_trans_cmplx_with(strategy, a, b, c, m, n, o)
                }),
            ));
            results.push((
                format!("{} MT", strategy.name()),
                bench_fn(&a, &b, m, n, o, cli.iterations, |a, b, c, m, n, o| {
                    mat_mult_trans_cmplx_mt(a, b, c, m, n, o, cli.threads, strategy)
                }),
            ));
        }

        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:12} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    Ok(())
}

/// Times `f` over `iterations` runs after one warmup, returns (ms, GFLOPS).
fn bench_fn<F>(
    a: &[f32],
    b: &[f32],
    m: usize,
    n: usize,
    o: usize,
    iterations: usize,
    f: F,
) -> (f64, f64)
where
    F: Fn(&[f32], &[f32], &mut [f32], usize, usize, usize),
{
    let mut c = vec![0.0f32; 2 * m * o];
    f(a, b, &mut c, m, n, o);

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(a, b, &mut c, m, n, o);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    // 8 real flops per complex multiply-accumulate
    let gflops = 8.0 * (m * n * o) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(String, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<14}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}³", size));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();

    for method_idx in 0..num_methods {
        let method_name = &all_results[0].1[method_idx].0;
        print!("{:<14}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            let baseline_time = results[0].1.0;
            print!(" {:>11.2} GF", gflops);
            speedups.push(baseline_time / time_ms);
        }

        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to the first method listed. Higher is better.\n");
}
